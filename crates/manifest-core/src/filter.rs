//! Pattern filtering over path sets

use regex::Regex;

use crate::{Error, PathSet, Result};

/// A compiled path filter.
///
/// The pattern is an unanchored regular expression matched anywhere in the
/// normalized path string, compiled once per run and reused across all
/// candidates.
#[derive(Debug)]
pub struct PatternFilter {
    regex: Regex,
}

impl PatternFilter {
    /// Compile `pattern`. An unparseable pattern fails the run before any
    /// comparison is attempted.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Keep only entries whose path string contains a match.
    pub fn apply(&self, paths: &PathSet) -> PathSet {
        paths
            .iter()
            .filter(|path| self.regex.is_match(path.as_str()))
            .cloned()
            .collect()
    }
}
