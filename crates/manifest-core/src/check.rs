//! The comparison pipeline

use std::fs;
use std::path::Path;

use crate::{
    DiffReport, Error, NormalizedPath, PatternFilter, Result, diff_sets, enumerate_files,
    extract_references,
};

/// Run one full consistency check: extract the manifest's references,
/// enumerate the files under its directory, and diff the two sets scoped by
/// `pattern`.
///
/// The manifest's own directory is both the base against which relative
/// references resolve and the root of the filesystem enumeration. The run
/// aborts on the first unrecoverable error; a non-clean report is the normal
/// "found problems" outcome, not an error.
pub fn check_manifest(manifest: &Path, pattern: &str) -> Result<DiffReport> {
    // Compile the pattern up front so a bad pattern fails the run before any
    // comparison work.
    let filter = PatternFilter::new(pattern)?;

    let manifest = dunce::canonicalize(manifest).map_err(|e| Error::io(manifest, e))?;
    let text = fs::read_to_string(&manifest).map_err(|e| Error::io(&manifest, e))?;

    let manifest = NormalizedPath::new(&manifest);
    let root = manifest.parent().ok_or_else(|| Error::NoManifestDir {
        path: manifest.to_native(),
    })?;
    tracing::debug!(manifest = %manifest, root = %root, "checking manifest");

    let referenced = extract_references(&text, &root);
    let existing = enumerate_files(&root)?;

    Ok(diff_sets(&existing, &referenced, &filter))
}
