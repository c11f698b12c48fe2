//! Strict Semantic Versioning 2.0.0 grammar parsing.
//!
//! Pure string validation — no IO, no clock. Two derived substrings matter
//! downstream:
//!
//! - `numeric_version` — `MAJOR.MINOR.PATCH` only.
//! - `version_with_prerelease` — numeric version plus optional prerelease,
//!   excluding build metadata.
//!
//! Build metadata (`+...`) is recognized and retained on the parsed value but
//! never participates in either derived substring.

use std::fmt;

/// Parse failure. The grammar is all-or-nothing: a candidate either matches
/// SemVer 2.0.0 exactly or it is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    InvalidFormat { raw: String },
}

impl fmt::Display for SemverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemverError::InvalidFormat { raw } => write!(
                f,
                "INVALID_VERSION_FORMAT: '{raw}' is not a valid semantic version"
            ),
        }
    }
}

impl std::error::Error for SemverError {}

/// A fully validated semantic version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<String>,
    pub build_metadata: Option<String>,
}

impl ParsedVersion {
    /// `MAJOR.MINOR.PATCH` only.
    pub fn numeric_version(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Numeric version plus prerelease; build metadata excluded.
    pub fn version_with_prerelease(&self) -> String {
        match &self.prerelease {
            Some(pre) => format!("{}.{}.{}-{}", self.major, self.minor, self.patch, pre),
            None => self.numeric_version(),
        }
    }
}

/// Validate `raw` against the SemVer 2.0.0 grammar.
///
/// Rejects leading zeros in any numeric identifier, a leading `v`, missing
/// components, and empty prerelease/build identifiers.
pub fn parse(raw: &str) -> Result<ParsedVersion, SemverError> {
    parse_inner(raw).ok_or_else(|| SemverError::InvalidFormat {
        raw: raw.to_string(),
    })
}

fn parse_inner(raw: &str) -> Option<ParsedVersion> {
    // Build metadata is everything after the first '+'.
    let (rest, build) = match raw.split_once('+') {
        Some((r, b)) => (r, Some(b)),
        None => (raw, None),
    };

    // Prerelease starts at the first '-' after the numeric core. Prerelease
    // identifiers may themselves contain hyphens, so only the first split counts.
    let (numeric, prerelease) = match rest.split_once('-') {
        Some((n, p)) => (n, Some(p)),
        None => (rest, None),
    };

    let mut parts = numeric.split('.');
    let major = numeric_identifier(parts.next()?)?;
    let minor = numeric_identifier(parts.next()?)?;
    let patch = numeric_identifier(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    if let Some(pre) = prerelease {
        if !pre.split('.').all(is_prerelease_identifier) {
            return None;
        }
    }
    if let Some(build) = build {
        if !build.split('.').all(is_build_identifier) {
            return None;
        }
    }

    Some(ParsedVersion {
        major,
        minor,
        patch,
        prerelease: prerelease.map(str::to_string),
        build_metadata: build.map(str::to_string),
    })
}

/// Non-negative integer without leading zeros. `0` itself is valid.
fn numeric_identifier(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

/// Either a no-leading-zero integer, or an alphanumeric/hyphen identifier
/// containing at least one non-digit.
fn is_prerelease_identifier(s: &str) -> bool {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        return false;
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        !(s.len() > 1 && s.starts_with('0'))
    } else {
        true
    }
}

/// Alphanumeric/hyphen identifier; leading zeros are allowed here.
fn is_build_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
