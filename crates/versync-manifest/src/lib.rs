//! Manifest IO — the only file-touching layer.
//!
//! The manifest is a JSON object with at least a string `version` field.
//! Every other field passes through untouched, in the order it was read
//! (serde_json `preserve_order`). Writing is a plain overwrite with 2-space
//! indentation; there is no atomic rename or backup, so callers must run
//! every validation before [`Manifest::save`].

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// A loaded manifest document bound to its path.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    doc: Value,
}

impl Manifest {
    /// Read and validate the manifest. Tolerates a UTF-8 BOM (common on
    /// Windows-authored JSON). Requires a top-level object with a string
    /// `version` field.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("read manifest failed: {}", path.display()))?;
        let bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(&bytes);
        let text = std::str::from_utf8(bytes)
            .with_context(|| format!("manifest must be UTF-8 text: {}", path.display()))?;

        let doc: Value = serde_json::from_str(text)
            .with_context(|| format!("manifest is not valid JSON: {}", path.display()))?;
        if !doc.is_object() {
            bail!("manifest root must be a JSON object: {}", path.display());
        }
        if doc.get("version").and_then(Value::as_str).is_none() {
            bail!(
                "manifest has no string 'version' field: {}",
                path.display()
            );
        }

        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `version` field. Guaranteed present by [`Manifest::load`].
    pub fn version(&self) -> &str {
        self.doc
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Replace only the `version` field; everything else is left alone.
    pub fn set_version(&mut self, version: &str) {
        if let Value::Object(map) = &mut self.doc {
            map.insert("version".to_string(), Value::String(version.to_string()));
        }
    }

    /// Write the document back to its path: 2-space indentation, field order
    /// as read, trailing newline.
    pub fn save(&self) -> Result<()> {
        let json =
            serde_json::to_string_pretty(&self.doc).context("serialize manifest failed")?;
        fs::write(&self.path, format!("{json}\n"))
            .with_context(|| format!("write manifest failed: {}", self.path.display()))?;
        Ok(())
    }
}

/// Read an assembly-metadata source file as UTF-8 text, BOM-tolerant.
pub fn read_metadata_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .with_context(|| format!("read assembly metadata failed: {}", path.display()))?;
    let bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(&bytes);
    String::from_utf8(bytes.to_vec())
        .with_context(|| format!("assembly metadata must be UTF-8 text: {}", path.display()))
}
