use std::fmt;

/// Checks the reconciler can perform, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Check {
    SemverFormat,
    AssemblyVersion,
    AssemblyFileVersion,
    GitTag,
    GitHash,
}

impl Check {
    /// Human-readable name used in the per-check status lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Check::SemverFormat => "Semantic Version",
            Check::AssemblyVersion => "Assembly Version",
            Check::AssemblyFileVersion => "Assembly File Version",
            Check::GitTag => "Git tag",
            Check::GitHash => "Git hash",
        }
    }
}

/// Evidence of a violated precondition. Each variant carries the conflicting
/// values where available so the failure line is actionable without re-running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Manifest version fails the SemVer grammar.
    InvalidVersionFormat { raw: String },

    /// An assembly declaration disagrees with the manifest numeric version.
    VersionMismatch {
        declaration: Check,
        declared: String,
        manifest: String,
    },

    /// The provided tag does not equal `"v" + version_with_prerelease`.
    TagMismatch { tag: String, expected: String },

    /// Neither a tag nor a commit hash was usable.
    MissingCommitHash,
}

impl Violation {
    /// Stable grep-able diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::InvalidVersionFormat { .. } => "INVALID_VERSION_FORMAT",
            Violation::VersionMismatch { .. } => "VERSION_MISMATCH",
            Violation::TagMismatch { .. } => "TAG_MISMATCH",
            Violation::MissingCommitHash => "MISSING_COMMIT_HASH",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::InvalidVersionFormat { raw } => write!(
                f,
                "INVALID_VERSION_FORMAT: '{raw}' is not a valid semantic version"
            ),
            Violation::VersionMismatch {
                declaration,
                declared,
                manifest,
            } => write!(
                f,
                "VERSION_MISMATCH: {} declares '{declared}' but the manifest version is '{manifest}'",
                declaration.as_str()
            ),
            Violation::TagMismatch { tag, expected } => write!(
                f,
                "TAG_MISMATCH: git tag '{tag}' does not match expected '{expected}'"
            ),
            Violation::MissingCommitHash => write!(
                f,
                "MISSING_COMMIT_HASH: no usable GIT_TAG/GIT_REV or GIT_HASH in the environment"
            ),
        }
    }
}

/// How a previously-appended reconciliation suffix is located in the manifest
/// version, so the base semver string can be recovered before the strict
/// grammar check. This is a string-splitting contract, not a parsing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SuffixConvention {
    /// The manifest version is taken as-is.
    NoSuffix,
    /// A revision suffix lives after the second hyphen; with fewer than two
    /// hyphens the version is taken as-is.
    HyphenRevision,
    /// The base version is everything before the first `+`.
    #[default]
    PlusBuildMetadata,
}

impl SuffixConvention {
    /// Recover the base version string from a possibly-suffixed manifest value.
    pub fn base_of<'a>(&self, version: &'a str) -> &'a str {
        match self {
            SuffixConvention::NoSuffix => version,
            SuffixConvention::HyphenRevision => {
                let mut hyphens = version.match_indices('-').map(|(i, _)| i);
                let _ = hyphens.next();
                match hyphens.next() {
                    Some(i) => &version[..i],
                    None => version,
                }
            }
            SuffixConvention::PlusBuildMetadata => version
                .split_once('+')
                .map(|(base, _)| base)
                .unwrap_or(version),
        }
    }
}

/// Environment-provided version signals. Empty strings count as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvSignals {
    /// `GIT_TAG` (or its `GIT_REV` alias), expected to equal
    /// `"v" + version_with_prerelease`.
    pub tag: Option<String>,
    /// `GIT_HASH`, appended as `+git.<hash>` when no tag is usable.
    pub commit_hash: Option<String>,
}

impl EnvSignals {
    /// Read `GIT_TAG`/`GIT_REV`/`GIT_HASH` from the process environment.
    /// `GIT_TAG` wins over `GIT_REV` when both are set.
    pub fn from_env() -> Self {
        let tag = std::env::var("GIT_TAG")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| std::env::var("GIT_REV").ok().filter(|v| !v.is_empty()));
        let commit_hash = std::env::var("GIT_HASH").ok().filter(|v| !v.is_empty());
        Self { tag, commit_hash }
    }

    pub fn usable_tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }

    pub fn usable_hash(&self) -> Option<&str> {
        self.commit_hash.as_deref().filter(|h| !h.is_empty())
    }
}

/// Full reconciliation report. Fail-fast: `passed` lists every check that ran
/// and succeeded before the first violation (if any) stopped the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Checks that passed, in execution order.
    pub passed: Vec<Check>,
    /// First violated precondition; `None` when the run is clean.
    pub violation: Option<Violation>,
    /// Reconciled manifest version; present only when every check passed.
    pub new_version: Option<String>,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.violation.is_none()
    }
}
