//! JSON scan report.

use serde_json::json;

use crate::scan::ScanReport;

/// Renders a scan report as pretty-printed JSON.
///
/// The document merges the service result with the derived risk level,
/// warnings, and recommendations, in the same shape the scanning service uses
/// for its own stored results.
pub fn render_json(report: &ScanReport) -> serde_json::Result<String> {
    let result = &report.result;
    let document = json!({
        "scan_id": report.scan_id,
        "url": report.record.url,
        "domain": result.display_domain(),
        "risk_score": result.score(),
        "risk_level": report.record.risk_level,
        "timestamp": report.record.timestamp,
        "checks": result.checks,
        "warnings": report.analysis.warnings,
        "recommendations": report.analysis.recommendations,
    });
    serde_json::to_string_pretty(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::models::{HistoryRecord, ScanResult};
    use crate::risk::RiskLevel;
    use serde_json::Value;

    #[test]
    fn test_render_json_document() {
        let result = ScanResult {
            url: "https://example.com".into(),
            risk_score: Some(12.0),
            ..Default::default()
        };
        let analysis = analyze(&result);
        let report = ScanReport {
            scan_id: 3,
            record: HistoryRecord {
                url: result.url.clone(),
                risk_level: RiskLevel::Low,
                timestamp: "2025-03-01T12:00:00".into(),
                issues: analysis.warnings.clone(),
            },
            result,
            analysis,
        };

        let rendered = render_json(&report).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["scan_id"], 3);
        assert_eq!(value["domain"], "example.com");
        assert_eq!(value["risk_level"], "Low");
        assert_eq!(value["risk_score"], 12.0);
        assert_eq!(value["checks"], serde_json::json!({}));
        assert_eq!(
            value["warnings"],
            serde_json::json!(["No HTTPS / Invalid SSL certificate"])
        );

        // A rendered report can be read back as a history record
        let record: HistoryRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record, report.record);
    }
}
