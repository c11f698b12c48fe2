//! Version reconciliation decision logic.
//!
//! Compares a manifest semver string against environment-provided git
//! signals (and, optionally, compiled-assembly version declarations) and
//! decides the new manifest version. The engine is pure; reading the process
//! environment is confined to [`EnvSignals::from_env`].

mod engine;
mod types;

pub use engine::{reconcile, ReconcileInputs};
pub use types::{Check, EnvSignals, ReconcileReport, SuffixConvention, Violation};
