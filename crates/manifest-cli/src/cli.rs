//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Manifest Check - Verify a project manifest against the files on disk
///
/// Compares the `Include="..."` references in MANIFEST against the files
/// present under the manifest's directory, restricted to paths matching
/// PATTERN. Reports files on disk that the manifest does not reference and
/// references that no longer exist on disk.
#[derive(Parser, Debug)]
#[command(name = "manifest-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the manifest file
    pub manifest: PathBuf,

    /// Regular expression selecting which files participate in the comparison
    pub pattern: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
