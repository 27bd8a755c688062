use std::cmp::Ordering;

use anyhow::bail;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use vercmp::version::Version;

#[derive(Parser)]
#[command(name = "vercmp")]
#[command(version, about = "Parse, normalize and compare version strings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a version string and print its canonical form
    Parse {
        /// Version string, e.g. "v1.2.3-alpha.1"
        version: String,

        /// Print the parsed fields as JSON instead of the canonical form
        #[arg(long)]
        json: bool,
    },
    /// Compare two version strings, printing -1, 0 or 1
    Compare {
        left: String,
        right: String,
    },
}

/// JSON record emitted by `parse --json`.
#[derive(Serialize)]
struct ParsedVersion<'a> {
    input: &'a str,
    valid: bool,
    canonical: String,
    major: u8,
    minor: u8,
    patch: u8,
    identifier: &'a str,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse { version, json } => {
            let parsed = Version::parse(&version);
            if json {
                let record = ParsedVersion {
                    input: &version,
                    valid: parsed.is_valid(),
                    canonical: parsed.canonical_form(),
                    major: parsed.major(),
                    minor: parsed.minor(),
                    patch: parsed.patch(),
                    identifier: parsed.identifier(),
                };
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else if parsed.is_valid() {
                println!("{}", parsed.canonical_form());
            } else {
                bail!("invalid version: {version:?}");
            }
        }
        Command::Compare { left, right } => {
            let lhs = Version::parse(&left);
            if !lhs.is_valid() {
                bail!("invalid version: {left:?}");
            }
            let rhs = Version::parse(&right);
            if !rhs.is_valid() {
                bail!("invalid version: {right:?}");
            }
            let signal = match lhs.compare(&rhs) {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };
            println!("{signal}");
        }
    }

    Ok(())
}
