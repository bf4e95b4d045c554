//! Set-difference reporting

use crate::{NormalizedPath, PathSet, PatternFilter};

/// The diagnostic result of one comparison run.
#[derive(Debug, Clone, Default)]
pub struct DiffReport {
    /// On disk, matching the pattern, absent from the manifest
    pub unreferenced: Vec<NormalizedPath>,
    /// In the manifest, matching the pattern, absent from disk
    pub missing: Vec<NormalizedPath>,
}

impl DiffReport {
    /// A run is clean only when both difference sets are empty.
    pub fn is_clean(&self) -> bool {
        self.unreferenced.is_empty() && self.missing.is_empty()
    }
}

/// Compute both difference sets between the files on disk and the manifest's
/// references, scoped by `filter`.
///
/// Both directions use case-insensitive membership, consistent with how the
/// sets were built, and preserve input enumeration order. The referenced set
/// is narrowed by the same pattern before the missing-file direction so a
/// reference outside the pattern's scope never counts as missing.
pub fn diff_sets(existing: &PathSet, referenced: &PathSet, filter: &PatternFilter) -> DiffReport {
    let existing_in_scope = filter.apply(existing);
    let referenced_in_scope = filter.apply(referenced);

    DiffReport {
        unreferenced: existing_in_scope.difference(referenced),
        missing: referenced_in_scope.difference(existing),
    }
}
