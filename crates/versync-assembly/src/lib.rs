//! Compiled-assembly metadata scanning.
//!
//! Extracts the version literals from C#-style attribute declarations of the
//! form:
//!
//! ```text
//! [assembly: AssemblyVersion("1.2.3.0")]
//! [assembly: AssemblyFileVersion("1.2.3.0")]
//! ```
//!
//! Only the `MAJOR.MINOR.PATCH` prefix of each four-part literal is retained;
//! the trailing revision component is required by the declaration form but
//! ignored for comparison. The scanner is whitespace-tolerant between tokens
//! and keeps the prefix as the literal substring, so `01.2.3` is *not*
//! normalized to `1.2.3` — mismatch detection is on exact strings.

/// Version prefixes found in an assembly metadata blob. `None` means the
/// declaration is absent, which downstream treats as vacuously satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyDeclarations {
    /// `MAJOR.MINOR.PATCH` prefix of `AssemblyVersion("...")`, if declared.
    pub assembly_version: Option<String>,
    /// `MAJOR.MINOR.PATCH` prefix of `AssemblyFileVersion("...")`, if declared.
    pub assembly_file_version: Option<String>,
}

/// Scan `text` for the two assembly version declarations.
pub fn scan(text: &str) -> AssemblyDeclarations {
    AssemblyDeclarations {
        assembly_version: find_declaration(text, "AssemblyVersion"),
        assembly_file_version: find_declaration(text, "AssemblyFileVersion"),
    }
}

/// Find the first well-formed `[assembly: <attribute>("X.Y.Z.W")]` and return
/// the `X.Y.Z` prefix. Malformed near-matches are skipped, not errors.
fn find_declaration(text: &str, attribute: &str) -> Option<String> {
    let mut rest = text;
    while let Some(start) = rest.find('[') {
        rest = &rest[start + 1..];
        if let Some(prefix) = declaration_at(rest, attribute) {
            return Some(prefix);
        }
    }
    None
}

/// Parse a declaration body starting just after `[`.
fn declaration_at(s: &str, attribute: &str) -> Option<String> {
    let s = s.trim_start().strip_prefix("assembly")?;
    let s = s.trim_start().strip_prefix(':')?;
    let s = s.trim_start().strip_prefix(attribute)?;
    let s = s.trim_start().strip_prefix('(')?;
    let s = s.trim_start().strip_prefix('"')?;
    let (literal, s) = s.split_once('"')?;
    let s = s.trim_start().strip_prefix(')')?;
    s.trim_start().strip_prefix(']')?;
    numeric_prefix(literal)
}

/// `X.Y.Z.W` with all-digit components -> `X.Y.Z` as written.
fn numeric_prefix(literal: &str) -> Option<String> {
    let parts: Vec<&str> = literal.split('.').collect();
    if parts.len() != 4 {
        return None;
    }
    if parts
        .iter()
        .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    Some(parts[..3].join("."))
}
