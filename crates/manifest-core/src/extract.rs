//! Manifest reference extraction
//!
//! Manifests are scanned as raw text for `Include="<value>"` markers; no
//! structural parsing is attempted, so a manifest that is not well-formed
//! markup still yields its references.

use std::sync::LazyLock;

use regex::Regex;

use crate::decode::{entity_decode, percent_decode};
use crate::{NormalizedPath, PathSet};

/// Pattern matching one reference marker and capturing its value
static INCLUDE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Include="(.*?)""#).unwrap());

/// Extract the set of file paths referenced by `manifest_text`.
///
/// Each captured value runs through an ordered pipeline: percent-decode,
/// entity-decode, resolve against `manifest_dir`. Candidates that resolve to
/// an existing directory are dropped; a directory reference is not a file
/// reference and must not poison the set. The result is deduplicated
/// case-insensitively, in extraction order.
pub fn extract_references(manifest_text: &str, manifest_dir: &NormalizedPath) -> PathSet {
    let mut references = PathSet::new();
    for cap in INCLUDE_PATTERN.captures_iter(manifest_text) {
        let Some(raw) = cap.get(1) else { continue };
        let resolved = resolve_reference(raw.as_str(), manifest_dir);
        if resolved.is_dir() {
            tracing::debug!(path = %resolved, "skipping directory reference");
            continue;
        }
        references.insert(resolved);
    }
    tracing::debug!(count = references.len(), "extracted manifest references");
    references
}

/// Decode one raw reference value and resolve it against the manifest's
/// directory. Entity decoding runs after percent decoding; the reverse order
/// would mis-decode percent-encoded entity delimiters.
fn resolve_reference(raw: &str, manifest_dir: &NormalizedPath) -> NormalizedPath {
    let decoded = entity_decode(&percent_decode(raw));
    manifest_dir.join(&decoded)
}
