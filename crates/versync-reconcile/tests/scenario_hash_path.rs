//! Hash path — no usable tag, commit hash appended as build metadata.
//!
//! GREEN when:
//! - With a hash and no tag, the new version is
//!   `version_with_prerelease + "+git." + hash`.
//! - With neither signal, the run fails with MISSING_COMMIT_HASH.
//! - An invalid manifest version fails before any git check runs.

use versync_reconcile::{
    reconcile, Check, EnvSignals, ReconcileInputs, SuffixConvention, Violation,
};

#[test]
fn hash_is_appended_as_git_build_metadata() {
    let signals = EnvSignals {
        tag: None,
        commit_hash: Some("abc123".to_string()),
    };
    let report = reconcile(&ReconcileInputs {
        manifest_version: "1.2.3",
        assembly: None,
        signals: &signals,
        convention: SuffixConvention::NoSuffix,
    });

    assert!(report.is_clean());
    assert_eq!(report.new_version.as_deref(), Some("1.2.3+git.abc123"));
    assert_eq!(report.passed, vec![Check::SemverFormat, Check::GitHash]);
}

#[test]
fn prerelease_survives_on_the_hash_path() {
    let signals = EnvSignals {
        tag: None,
        commit_hash: Some("f00dcafe".to_string()),
    };
    let report = reconcile(&ReconcileInputs {
        manifest_version: "0.46.0-beta",
        assembly: None,
        signals: &signals,
        convention: SuffixConvention::NoSuffix,
    });

    assert_eq!(
        report.new_version.as_deref(),
        Some("0.46.0-beta+git.f00dcafe")
    );
}

#[test]
fn missing_both_signals_blocks() {
    let signals = EnvSignals::default();
    let report = reconcile(&ReconcileInputs {
        manifest_version: "1.2.3",
        assembly: None,
        signals: &signals,
        convention: SuffixConvention::NoSuffix,
    });

    assert_eq!(report.violation, Some(Violation::MissingCommitHash));
    assert_eq!(report.new_version, None);
    // The grammar check still ran and passed before the failure.
    assert_eq!(report.passed, vec![Check::SemverFormat]);
}

#[test]
fn empty_hash_counts_as_absent() {
    let signals = EnvSignals {
        tag: None,
        commit_hash: Some(String::new()),
    };
    let report = reconcile(&ReconcileInputs {
        manifest_version: "1.2.3",
        assembly: None,
        signals: &signals,
        convention: SuffixConvention::NoSuffix,
    });

    assert_eq!(report.violation, Some(Violation::MissingCommitHash));
}

#[test]
fn invalid_manifest_version_fails_before_git_checks() {
    let signals = EnvSignals {
        tag: None,
        commit_hash: Some("abc123".to_string()),
    };
    let report = reconcile(&ReconcileInputs {
        manifest_version: "1.01.0",
        assembly: None,
        signals: &signals,
        convention: SuffixConvention::NoSuffix,
    });

    assert_eq!(
        report.violation,
        Some(Violation::InvalidVersionFormat {
            raw: "1.01.0".to_string()
        })
    );
    assert!(report.passed.is_empty());
}
