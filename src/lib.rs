//! Parse, normalize and compare bounded semver-style version strings.
//!
//! The core type is [`version::Version`]: a single forward scan turns a
//! raw string like `v1.2.3-alpha.1` into three numeric components (each
//! in 0..=255) plus a free-text identifier, exposes a total ordering over
//! them and serializes back to the canonical `major.minor.patch[-id]`
//! form. Parsing never fails; malformed input yields an invalid version.

pub mod version;

pub use version::Version;
