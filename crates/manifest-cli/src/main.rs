//! Manifest Check CLI
//!
//! The command-line interface for verifying a project manifest against the
//! files actually present on disk.

mod cli;
mod error;
mod report;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;
use manifest_core::check_manifest;

fn main() {
    match run() {
        // Diagnostic failure: findings were already printed to stdout.
        Ok(clean) if !clean => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let report = check_manifest(&cli.manifest, &cli.pattern)?;
    report::print_report(&report);
    Ok(report.is_clean())
}
