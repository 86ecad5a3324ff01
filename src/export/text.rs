//! Plain-text scan report.

use std::fmt::Write;

use crate::models::Checks;
use crate::scan::ScanReport;

const RULE_WIDTH: usize = 50;

/// Renders a scan report as plain text.
///
/// Layout: banner, URL/domain/score summary, one line per check, then the
/// warnings and recommendations in analysis order.
pub fn render_text(report: &ScanReport) -> String {
    let mut out = String::new();
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let result = &report.result;

    // Writing to a String cannot fail
    let _ = writeln!(out, "URL SECURITY SCAN REPORT");
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "URL: {}", report.record.url);
    let _ = writeln!(
        out,
        "Domain: {}",
        result.display_domain().unwrap_or_else(|| "-".to_string())
    );
    let _ = writeln!(
        out,
        "Risk Score: {} ({})",
        result.score(),
        report.record.risk_level
    );
    let _ = writeln!(out, "Scanned at: {}", report.record.timestamp);
    let _ = writeln!(out);

    let _ = writeln!(out, "CHECK RESULTS");
    let _ = writeln!(out, "{light}");
    for line in check_lines(&result.checks) {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "WARNINGS");
    let _ = writeln!(out, "{light}");
    write_items(&mut out, &report.analysis.warnings, "No warnings");
    let _ = writeln!(out);

    let _ = writeln!(out, "RECOMMENDATIONS");
    let _ = writeln!(out, "{light}");
    write_items(&mut out, &report.analysis.recommendations, "No recommendations");
    let _ = writeln!(out, "{heavy}");

    out
}

fn write_items(out: &mut String, items: &[String], empty: &str) {
    if items.is_empty() {
        let _ = writeln!(out, "{empty}");
    }
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}

/// One summary line per check block.
pub fn check_lines(checks: &Checks) -> Vec<String> {
    let ssl = match &checks.ssl {
        Some(ssl) if ssl.certificate_valid => "✓ Pass",
        _ => "✗ Fail",
    };

    let headers = match &checks.security_headers {
        Some(h) if !h.missing_headers.is_empty() => {
            format!("⚠ Missing {} headers", h.missing_headers.len())
        }
        _ => "✓ All Present".to_string(),
    };

    let domain = match &checks.domain_analysis {
        Some(d) if d.is_suspicious => "✗ Suspicious Domain",
        _ => "✓ Safe Domain",
    };

    let advanced = match &checks.advanced_detection {
        Some(a) if !a.warnings.is_empty() => format!("⚠ {} issues found", a.warnings.len()),
        Some(a) if a.has_findings() => "⚠ Risk score reported".to_string(),
        _ => "✓ No Issues Detected".to_string(),
    };

    vec![
        format!("SSL Certificate: {ssl}"),
        format!("Security Headers: {headers}"),
        format!("Domain Analysis: {domain}"),
        format!("Advanced Detection: {advanced}"),
    ]
}
