//! Reconciliation decision engine.
//!
//! Pure and deterministic — no IO, no clock, no process environment. The
//! engine takes the manifest version, optional assembly declarations and the
//! environment signals, runs the checks in a fixed order, and stops at the
//! first violation:
//!
//! 1. SemVer grammar on the (suffix-stripped) manifest version.
//! 2. AssemblyVersion, then AssemblyFileVersion, when declarations were
//!    scanned. An absent declaration is vacuously satisfied.
//! 3. Git tag equality, or commit-hash presence when no tag is usable.
//!
//! A clean report carries the new manifest version: the bare
//! version-with-prerelease on the tag path, or
//! `version_with_prerelease + "+git." + hash` on the hash path. Both paths
//! strip build metadata and any previously-appended suffix, which makes
//! re-running with the same hash replace the suffix instead of concatenating.

use versync_assembly::AssemblyDeclarations;

use crate::types::{Check, EnvSignals, ReconcileReport, SuffixConvention, Violation};

/// Everything the engine needs for one decision.
#[derive(Debug)]
pub struct ReconcileInputs<'a> {
    /// The `version` field as read from the manifest, possibly still carrying
    /// a suffix from a previous reconciliation.
    pub manifest_version: &'a str,
    /// Scanned assembly declarations; `None` when no metadata file was given.
    pub assembly: Option<&'a AssemblyDeclarations>,
    pub signals: &'a EnvSignals,
    pub convention: SuffixConvention,
}

/// Run the full check sequence and decide the new manifest version.
pub fn reconcile(inputs: &ReconcileInputs<'_>) -> ReconcileReport {
    let mut passed = Vec::new();

    let base = inputs.convention.base_of(inputs.manifest_version);
    let parsed = match versync_semver::parse(base) {
        Ok(p) => p,
        Err(_) => {
            return fail(
                passed,
                Violation::InvalidVersionFormat {
                    raw: base.to_string(),
                },
            )
        }
    };
    passed.push(Check::SemverFormat);

    let numeric_version = parsed.numeric_version();
    let version_with_prerelease = parsed.version_with_prerelease();

    if let Some(decls) = inputs.assembly {
        for (check, declared) in [
            (Check::AssemblyVersion, &decls.assembly_version),
            (Check::AssemblyFileVersion, &decls.assembly_file_version),
        ] {
            if let Some(declared) = declared {
                if declared != &numeric_version {
                    return fail(
                        passed,
                        Violation::VersionMismatch {
                            declaration: check,
                            declared: declared.clone(),
                            manifest: numeric_version.clone(),
                        },
                    );
                }
            }
            // Absent declaration: vacuously satisfied, still reported.
            passed.push(check);
        }
    }

    if let Some(tag) = inputs.signals.usable_tag() {
        let expected = format!("v{version_with_prerelease}");
        if tag != expected {
            return fail(
                passed,
                Violation::TagMismatch {
                    tag: tag.to_string(),
                    expected,
                },
            );
        }
        passed.push(Check::GitTag);
        return ReconcileReport {
            passed,
            violation: None,
            new_version: Some(version_with_prerelease),
        };
    }

    match inputs.signals.usable_hash() {
        None => fail(passed, Violation::MissingCommitHash),
        Some(hash) => {
            passed.push(Check::GitHash);
            ReconcileReport {
                passed,
                violation: None,
                new_version: Some(format!("{version_with_prerelease}+git.{hash}")),
            }
        }
    }
}

fn fail(passed: Vec<Check>, violation: Violation) -> ReconcileReport {
    ReconcileReport {
        passed,
        violation: Some(violation),
        new_version: None,
    }
}
