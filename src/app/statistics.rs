//! Statistics and history printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FailureKind, ScanStats};
use crate::models::HistoryRecord;

/// Prints scan outcome counts to the log.
pub fn print_scan_statistics(stats: &ScanStats) {
    let total_failures = stats.total_failures();

    info!(
        "Scan statistics: total={}, succeeded={}, failed={}",
        stats.total(),
        stats.success_count(),
        total_failures
    );

    if total_failures > 0 {
        info!("Failure Counts ({} total):", total_failures);
        for kind in FailureKind::iter() {
            let count = stats.failure_count(kind);
            if count > 0 {
                info!("   {}: {}", kind.as_str(), count);
            }
        }
    }
}

/// Formats history records as display lines, newest first.
pub fn history_lines(records: &[HistoryRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| {
            let issues = if record.issues.is_empty() {
                "No issues".to_string()
            } else {
                format!("{} issue(s)", record.issues.len())
            };
            format!(
                "{} | {} | {} | {}",
                record.timestamp, record.risk_level, record.url, issues
            )
        })
        .collect()
}

/// Prints the scan history to stdout.
pub fn print_history(records: &[HistoryRecord]) {
    println!("SCAN HISTORY");
    if records.is_empty() {
        println!("No scans yet");
        return;
    }
    for line in history_lines(records) {
        println!("{line}");
    }
}
