//! Console rendering of a diff report

use manifest_core::DiffReport;

/// Print the report to stdout.
///
/// A clean report prints nothing at all. Each non-empty difference set gets
/// a header line followed by one line per file, in enumeration order.
pub fn print_report(report: &DiffReport) {
    if !report.unreferenced.is_empty() {
        println!("Not included files found!");
        for path in &report.unreferenced {
            println!("{path} not included!");
        }
    }

    if !report.missing.is_empty() {
        println!("Missing files found!");
        for path in &report.missing {
            println!("{path} missing!");
        }
    }
}
