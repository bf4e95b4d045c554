//! Case-insensitive, insertion-ordered path sets

use std::collections::HashSet;

use crate::NormalizedPath;

/// A set of paths deduplicated and membership-tested case-insensitively.
///
/// Insertion order is preserved so diagnostic output follows the order in
/// which entries were extracted or enumerated. The first spelling of a path
/// wins; later insertions differing only by case are dropped.
#[derive(Debug, Default, Clone)]
pub struct PathSet {
    /// Folded forms, for membership tests
    keys: HashSet<String>,
    /// Original spellings, in insertion order
    entries: Vec<NormalizedPath>,
}

impl PathSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a path. Returns true if it was not already present.
    pub fn insert(&mut self, path: NormalizedPath) -> bool {
        if self.keys.insert(path.fold()) {
            self.entries.push(path);
            true
        } else {
            false
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, path: &NormalizedPath) -> bool {
        self.keys.contains(&path.fold())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &NormalizedPath> {
        self.entries.iter()
    }

    /// Entries of `self` absent from `other`, in insertion order.
    pub fn difference(&self, other: &PathSet) -> Vec<NormalizedPath> {
        self.entries
            .iter()
            .filter(|path| !other.contains(path))
            .cloned()
            .collect()
    }
}

impl FromIterator<NormalizedPath> for PathSet {
    fn from_iter<I: IntoIterator<Item = NormalizedPath>>(iter: I) -> Self {
        let mut set = Self::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_dedupes_case_insensitively() {
        let mut set = PathSet::new();
        assert!(set.insert(NormalizedPath::new("/proj/A.txt")));
        assert!(!set.insert(NormalizedPath::new("/proj/a.TXT")));
        assert_eq!(set.len(), 1);
        // First spelling wins
        assert_eq!(set.iter().next().unwrap().as_str(), "/proj/A.txt");
    }

    #[test]
    fn contains_ignores_case() {
        let mut set = PathSet::new();
        set.insert(NormalizedPath::new("/proj/src/Main.rs"));
        assert!(set.contains(&NormalizedPath::new("/proj/SRC/main.RS")));
        assert!(!set.contains(&NormalizedPath::new("/proj/src/other.rs")));
    }

    #[test]
    fn difference_preserves_insertion_order() {
        let a: PathSet = ["/p/one.txt", "/p/two.txt", "/p/three.txt"]
            .into_iter()
            .map(NormalizedPath::new)
            .collect();
        let b: PathSet = [NormalizedPath::new("/p/TWO.txt")].into_iter().collect();

        let diff = a.difference(&b);
        let names: Vec<&str> = diff.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, vec!["/p/one.txt", "/p/three.txt"]);
    }
}
