//! Manifest/filesystem consistency checking
//!
//! Compares the file references in a project manifest (flat text containing
//! `Include="<value>"` markers) against the files actually present under the
//! manifest's directory, scoped by a caller-supplied regular expression.
//! One linear pass: extract, enumerate, filter, diff, report.

pub mod check;
pub mod decode;
pub mod diff;
pub mod enumerate;
pub mod error;
pub mod extract;
pub mod filter;
pub mod path;
pub mod set;

pub use check::check_manifest;
pub use diff::{DiffReport, diff_sets};
pub use enumerate::enumerate_files;
pub use error::{Error, Result};
pub use extract::extract_references;
pub use filter::PatternFilter;
pub use path::NormalizedPath;
pub use set::PathSet;
