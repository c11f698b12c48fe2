use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use versync_reconcile::{EnvSignals, ReconcileInputs, SuffixConvention};

#[derive(Parser)]
#[command(name = "versync")]
#[command(
    about = "Reconcile a JSON manifest version with git build metadata",
    long_about = None
)]
struct Cli {
    /// Path to the manifest JSON file (must contain a string `version` field)
    manifest: PathBuf,

    /// Optional compiled-assembly metadata source file to cross-check
    /// (AssemblyVersion / AssemblyFileVersion declarations)
    assembly_info: Option<PathBuf>,

    /// How a previously-appended reconciliation suffix is located in the
    /// manifest version before validation
    #[arg(long, value_enum, default_value_t = SuffixArg::PlusBuildMetadata)]
    suffix_convention: SuffixArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SuffixArg {
    NoSuffix,
    HyphenRevision,
    PlusBuildMetadata,
}

impl From<SuffixArg> for SuffixConvention {
    fn from(arg: SuffixArg) -> Self {
        match arg {
            SuffixArg::NoSuffix => SuffixConvention::NoSuffix,
            SuffixArg::HyphenRevision => SuffixConvention::HyphenRevision,
            SuffixArg::PlusBuildMetadata => SuffixConvention::PlusBuildMetadata,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut manifest = versync_manifest::Manifest::load(&cli.manifest)?;
    let manifest_version = manifest.version().to_string();

    let assembly = match &cli.assembly_info {
        Some(path) => {
            let text = versync_manifest::read_metadata_text(path)?;
            Some(versync_assembly::scan(&text))
        }
        None => None,
    };

    let signals = EnvSignals::from_env();
    tracing::debug!(
        tag = ?signals.tag,
        commit_hash = ?signals.commit_hash,
        manifest_version = %manifest_version,
        "reconciling"
    );

    let report = versync_reconcile::reconcile(&ReconcileInputs {
        manifest_version: &manifest_version,
        assembly: assembly.as_ref(),
        signals: &signals,
        convention: cli.suffix_convention.into(),
    });

    for check in &report.passed {
        println!("\u{2714} {}", check.as_str());
    }

    if let Some(violation) = &report.violation {
        // No write on any failure path; the manifest stays byte-identical.
        bail!("{violation}");
    }

    let new_version = report
        .new_version
        .context("clean reconcile produced no version")?;
    manifest.set_version(&new_version);
    manifest.save()?;

    println!("manifest_version={new_version}");
    Ok(())
}
