//! Normalized path handling for cross-platform comparison

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Manifests written on Windows reference files with backslashes while
/// filesystem enumeration may yield either separator; normalizing both sides
/// to forward slashes lets paths act as plain string identifiers. Conversion
/// to the platform-native form happens only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// The case-insensitive identity of this path.
    ///
    /// Two paths naming the same entry on a case-insensitive filesystem fold
    /// to the same key. Used for set membership, never for display.
    pub fn fold(&self) -> String {
        self.inner.to_lowercase()
    }

    /// Join this path with a segment, normalizing the segment's separators.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Check if this path is an existing directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalizes_backslashes() {
        let path = NormalizedPath::new("foo\\bar\\baz.txt");
        assert_eq!(path.as_str(), "foo/bar/baz.txt");
    }

    #[test]
    fn join_normalizes_segment() {
        let base = NormalizedPath::new("/proj");
        assert_eq!(base.join("src\\main.cs").as_str(), "/proj/src/main.cs");
    }

    #[test]
    fn join_handles_trailing_slash() {
        let base = NormalizedPath::new("/proj/");
        assert_eq!(base.join("a.txt").as_str(), "/proj/a.txt");
    }

    #[test]
    fn parent_of_nested_path() {
        let path = NormalizedPath::new("/proj/src/main.cs");
        assert_eq!(path.parent().unwrap().as_str(), "/proj/src");
    }

    #[test]
    fn parent_of_root_level_file() {
        let path = NormalizedPath::new("/main.cs");
        assert_eq!(path.parent().unwrap().as_str(), "/");
    }

    #[test]
    fn fold_is_case_insensitive_identity() {
        let a = NormalizedPath::new("/Proj/A.TXT");
        let b = NormalizedPath::new("/proj/a.txt");
        assert_eq!(a.fold(), b.fold());
    }
}
