//! Filesystem enumeration

use std::fs;

use crate::{Error, NormalizedPath, PathSet, Result};

/// List every file reachable under `root` by recursive descent.
///
/// Directories themselves are not members of the result. Symlinks are not
/// followed, which also rules out link cycles. Any traversal failure is
/// fatal; an unreadable subtree aborts the run rather than producing a
/// silently incomplete set.
pub fn enumerate_files(root: &NormalizedPath) -> Result<PathSet> {
    let mut files = PathSet::new();
    walk(root, &mut files)?;
    tracing::debug!(root = %root, count = files.len(), "enumerated files");
    Ok(files)
}

fn walk(dir: &NormalizedPath, files: &mut PathSet) -> Result<()> {
    let native = dir.to_native();
    for entry in fs::read_dir(&native).map_err(|e| Error::io(&native, e))? {
        let entry = entry.map_err(|e| Error::io(&native, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        let path = NormalizedPath::new(entry.path());
        if file_type.is_dir() {
            walk(&path, files)?;
        } else if file_type.is_file() {
            files.insert(path);
        }
        // Symlinks fall through: not followed, not counted as files.
    }
    Ok(())
}
