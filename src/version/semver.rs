//! Bounded semver-style version parsing, comparison and serialization
//!
//! A version string holds up to three numeric components, each limited to
//! the range 0..=255, followed by an optional free-text identifier:
//!
//! - `v1.2.3` - a leading `v` is allowed and skipped
//! - `1.2`, `3` - omitted trailing components default to 0
//! - `1.2.3-alpha.1` - identifier after a `-`, `+` or `.` connector
//! - `1.2.3abc` - identifier without a connector
//!
//! Parsing is total: malformed input never produces an error, it produces
//! a [`Version`] whose [`Version::is_valid`] returns false and whose
//! numeric components are reset to 0. Callers must check validity before
//! trusting comparisons or the canonical form.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

/// Maximum accepted length of a version string, in bytes.
pub const VERSION_MAX_LEN: usize = 255;

/// Upper bound for each numeric component.
pub const COMPONENT_MAX: u32 = u8::MAX as u32;

/// Characters recognized as the connector between the patch component and
/// the identifier. The first one is used when serializing.
pub const IDENTIFIER_CONNECTORS: [char; 3] = ['-', '+', '.'];

/// A parsed version.
///
/// Constructed once by [`Version::parse`] and immutable afterwards.
/// Equality and ordering cover `(major, minor, patch, identifier)`; the
/// validity flag and the original text are not part of the comparable
/// identity.
#[derive(Debug, Clone)]
pub struct Version {
    major: u8,
    minor: u8,
    patch: u8,
    identifier: String,
    valid: bool,
    /// Unparsed source text, kept for diagnostics only.
    original: String,
}

impl Version {
    /// Parse a version string.
    ///
    /// Always returns a `Version`; failure is reported through
    /// [`Version::is_valid`] rather than an error path.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() || text.len() > VERSION_MAX_LEN {
            debug!("rejecting version string of {} bytes", text.len());
            return Self::invalid(text);
        }

        // A leading 'v' is not part of any component.
        let body = text.strip_prefix('v').unwrap_or(text);

        let mut components = [0u8; 3];
        // 0 = major, 1 = minor, 2 = patch
        let mut index = 0;
        let mut sum: u32 = 0;
        let mut has_digits = false;

        for (pos, ch) in body.char_indices() {
            if let Some(digit) = ch.to_digit(10) {
                // Saturating so an oversized digit run cannot wrap back
                // under the component bound.
                sum = sum.saturating_mul(10).saturating_add(digit);
                has_digits = true;
                continue;
            }

            if ch == '.' {
                if !has_digits {
                    // Leading or doubled dot, e.g. ".abc" or "1..2".
                    debug!("dot with no pending digits at byte {pos}");
                    return Self::invalid(text);
                }
                let Some(value) = component_in_range(sum) else {
                    return Self::invalid(text);
                };
                components[index] = value;
                index += 1;
                sum = 0;
                has_digits = false;
                if index == 3 {
                    // Patch is finalized; this dot doubles as the connector.
                    return Self::new(text, components, identifier_at(body, pos));
                }
                continue;
            }

            // Any other character ends numeric parsing. That is only legal
            // while the patch component is being accumulated.
            if index == 2 && has_digits {
                let Some(value) = component_in_range(sum) else {
                    return Self::invalid(text);
                };
                components[2] = value;
                return Self::new(text, components, identifier_at(body, pos));
            }
            debug!("unexpected character {ch:?} at byte {pos}");
            return Self::invalid(text);
        }

        // End of input: finalize the component being accumulated, if any.
        // Components never written keep their 0 default.
        if has_digits {
            let Some(value) = component_in_range(sum) else {
                return Self::invalid(text);
            };
            components[index] = value;
        }
        Self::new(text, components, String::new())
    }

    fn new(original: &str, components: [u8; 3], identifier: String) -> Self {
        let [major, minor, patch] = components;
        Self {
            major,
            minor,
            patch,
            identifier,
            valid: true,
            original: original.to_string(),
        }
    }

    fn invalid(original: &str) -> Self {
        Self {
            major: 0,
            minor: 0,
            patch: 0,
            identifier: String::new(),
            valid: false,
            original: original.to_string(),
        }
    }

    /// Whether the source text parsed as a well-formed version.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn major(&self) -> u8 {
        self.major
    }

    pub fn minor(&self) -> u8 {
        self.minor
    }

    pub fn patch(&self) -> u8 {
        self.patch
    }

    /// Free-text suffix after the patch component, connector stripped.
    /// Taken verbatim from the source, trailing whitespace included.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The unparsed source text this version was built from.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Three-way comparison: the numeric components first, numerically,
    /// then the identifier as a plain byte-wise string comparison.
    ///
    /// Invalid versions participate as `0.0.0` with whatever identifier
    /// was computed; check [`Version::is_valid`] before relying on the
    /// result.
    pub fn compare(&self, other: &Version) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    /// Canonical textual form: `major.minor.patch`, then `-` and the
    /// identifier when the identifier is non-empty. Invalid versions have
    /// no canonical form and serialize to the empty string.
    pub fn canonical_form(&self) -> String {
        if !self.valid {
            return String::new();
        }
        let mut out = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if !self.identifier.is_empty() {
            out.push(IDENTIFIER_CONNECTORS[0]);
            out.push_str(&self.identifier);
        }
        out
    }

    fn sort_key(&self) -> (u8, u8, u8, &str) {
        (self.major, self.minor, self.patch, self.identifier.as_str())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_form())
    }
}

/// Range-check an accumulated component value into a `u8`.
fn component_in_range(sum: u32) -> Option<u8> {
    if sum > COMPONENT_MAX {
        debug!("component value {sum} exceeds {COMPONENT_MAX}");
        return None;
    }
    Some(sum as u8)
}

/// Slice the identifier out of the version body starting at `pos`. A
/// single leading connector character is consumed, not kept.
fn identifier_at(body: &str, pos: usize) -> String {
    let suffix = &body[pos..];
    match suffix.chars().next() {
        Some(ch) if IDENTIFIER_CONNECTORS.contains(&ch) => suffix[ch.len_utf8()..].to_string(),
        _ => suffix.to_string(),
    }
}
