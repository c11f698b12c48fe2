//! Suffix conventions — locating a previously-appended suffix.
//!
//! GREEN when:
//! - PlusBuildMetadata splits on the first `+`, so re-running the hash path
//!   replaces the old `+git.<hash>` suffix instead of concatenating.
//! - HyphenRevision splits after the second hyphen only.
//! - NoSuffix leaves the version alone (the grammar still strips `+...`
//!   through version_with_prerelease).

use versync_reconcile::{reconcile, EnvSignals, ReconcileInputs, SuffixConvention};

fn hash(h: &str) -> EnvSignals {
    EnvSignals {
        tag: None,
        commit_hash: Some(h.to_string()),
    }
}

#[test]
fn plus_convention_base_splits_on_first_plus() {
    let c = SuffixConvention::PlusBuildMetadata;
    assert_eq!(c.base_of("1.2.3+git.abc123"), "1.2.3");
    assert_eq!(c.base_of("1.2.3-pre+git.abc+extra"), "1.2.3-pre");
    assert_eq!(c.base_of("1.2.3"), "1.2.3");
}

#[test]
fn hyphen_convention_base_splits_after_second_hyphen() {
    let c = SuffixConvention::HyphenRevision;
    assert_eq!(c.base_of("1.2.3-pre-rev42"), "1.2.3-pre");
    assert_eq!(c.base_of("1.2.3-alpha-1.x-y"), "1.2.3-alpha");
    // Fewer than two hyphens: taken as-is.
    assert_eq!(c.base_of("1.2.3-pre"), "1.2.3-pre");
    assert_eq!(c.base_of("1.2.3"), "1.2.3");
}

#[test]
fn no_suffix_convention_takes_version_as_is() {
    let c = SuffixConvention::NoSuffix;
    assert_eq!(c.base_of("1.2.3+git.abc123"), "1.2.3+git.abc123");
}

#[test]
fn hash_path_is_idempotent_under_plus_convention() {
    let signals = hash("abc123");
    let first = reconcile(&ReconcileInputs {
        manifest_version: "1.2.3",
        assembly: None,
        signals: &signals,
        convention: SuffixConvention::PlusBuildMetadata,
    });
    assert_eq!(first.new_version.as_deref(), Some("1.2.3+git.abc123"));

    // Run again over the already-reconciled value with the same hash.
    let second = reconcile(&ReconcileInputs {
        manifest_version: "1.2.3+git.abc123",
        assembly: None,
        signals: &signals,
        convention: SuffixConvention::PlusBuildMetadata,
    });
    assert_eq!(second.new_version.as_deref(), Some("1.2.3+git.abc123"));
}

#[test]
fn new_hash_replaces_the_old_suffix() {
    let signals = hash("def456");
    let report = reconcile(&ReconcileInputs {
        manifest_version: "1.2.3+git.abc123",
        assembly: None,
        signals: &signals,
        convention: SuffixConvention::PlusBuildMetadata,
    });
    assert_eq!(report.new_version.as_deref(), Some("1.2.3+git.def456"));
}

#[test]
fn hyphen_convention_replaces_only_the_revision_suffix() {
    let signals = hash("abc123");
    let report = reconcile(&ReconcileInputs {
        manifest_version: "1.2.3-pre-oldrev",
        assembly: None,
        signals: &signals,
        convention: SuffixConvention::HyphenRevision,
    });
    assert_eq!(report.new_version.as_deref(), Some("1.2.3-pre+git.abc123"));
}

#[test]
fn tag_path_strips_a_previously_appended_suffix() {
    let signals = EnvSignals {
        tag: Some("v1.2.3".to_string()),
        commit_hash: None,
    };
    let report = reconcile(&ReconcileInputs {
        manifest_version: "1.2.3+git.abc123",
        assembly: None,
        signals: &signals,
        convention: SuffixConvention::PlusBuildMetadata,
    });
    assert_eq!(report.new_version.as_deref(), Some("1.2.3"));
}
