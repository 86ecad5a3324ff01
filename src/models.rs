//! Data types exchanged with the scanning service and kept in the scan history.
//!
//! Scan results are parsed leniently: every sub-block of `checks` is optional,
//! and a sub-block that is present but has the wrong shape is treated as absent
//! rather than failing the whole response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::risk::RiskLevel;

/// Body of the outbound scan request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRequest {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SslCheck {
    #[serde(default)]
    pub certificate_valid: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityHeadersCheck {
    #[serde(default)]
    pub missing_headers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainAnalysis {
    #[serde(default)]
    pub is_suspicious: bool,
}

/// Pattern-based findings. Older service revisions only report a numeric
/// `total_risk_score`; newer ones report a list of warnings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedDetection {
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_risk_score: Option<f64>,
}

impl AdvancedDetection {
    /// True when the service reported at least one finding, either as a
    /// warning or as a positive numeric score.
    pub fn has_findings(&self) -> bool {
        !self.warnings.is_empty() || self.total_risk_score.is_some_and(|score| score > 0.0)
    }
}

/// The `checks` object of a scan result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Checks {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub ssl: Option<SslCheck>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub security_headers: Option<SecurityHeadersCheck>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub domain_analysis: Option<DomainAnalysis>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub advanced_detection: Option<AdvancedDetection>,
}

/// Structured verdict returned by the scanning service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub risk_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub checks: Checks,
}

impl ScanResult {
    /// Parses a response body.
    ///
    /// Only a body that is not JSON, or is JSON but not an object, is an error.
    /// Missing or mistyped fields degrade to "no data".
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(format!(
                "expected a JSON object, found {}",
                json_type_name(&value)
            )));
        }
        serde_json::from_value(value)
    }

    /// Risk score with an absent value treated as 0.
    pub fn score(&self) -> f64 {
        self.risk_score.unwrap_or(0.0)
    }

    /// Domain to display: the service's value, or the URL host without a
    /// leading `www.` when the service omitted it.
    pub fn display_domain(&self) -> Option<String> {
        if let Some(domain) = self.domain.as_deref().filter(|d| !d.trim().is_empty()) {
            return Some(domain.to_string());
        }
        let parsed = url::Url::parse(&self.url).ok()?;
        let host = parsed.host_str()?;
        Some(host.strip_prefix("www.").unwrap_or(host).to_string())
    }
}

/// One finalized scan as shown in the history view.
///
/// `warnings` is accepted as an alias of `issues` so full scan results
/// returned by the recent-scans endpoint can be read directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub url: String,
    pub risk_level: RiskLevel,
    #[serde(deserialize_with = "non_blank")]
    pub timestamp: String,
    #[serde(default, alias = "warnings")]
    pub issues: Vec<String>,
}

fn non_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.trim().is_empty() {
        return Err(serde::de::Error::custom("expected a non-empty timestamp"));
    }
    Ok(value)
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            log::debug!("Ignoring malformed field in scan result: {e}");
            Ok(None)
        }
    }
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_scan_result() {
        let body = r#"{
            "url": "https://example.com",
            "domain": "example.com",
            "timestamp": "2025-01-01T00:00:00",
            "risk_score": 42,
            "checks": {
                "ssl": {"certificate_valid": true},
                "security_headers": {"missing_headers": ["X-Frame-Options", "Content-Security-Policy"]},
                "domain_analysis": {"is_suspicious": false},
                "advanced_detection": {"warnings": ["Redirect chain detected"]}
            }
        }"#;

        let result = ScanResult::from_json(body).unwrap();
        assert_eq!(result.url, "https://example.com");
        assert_eq!(result.risk_score, Some(42.0));
        assert_eq!(
            result.checks.ssl,
            Some(SslCheck {
                certificate_valid: true
            })
        );
        assert_eq!(
            result.checks.security_headers.unwrap().missing_headers,
            vec!["X-Frame-Options", "Content-Security-Policy"]
        );
        assert!(!result.checks.domain_analysis.unwrap().is_suspicious);
        assert_eq!(
            result.checks.advanced_detection.unwrap().warnings,
            vec!["Redirect chain detected"]
        );
    }

    #[test]
    fn test_parse_missing_checks_degrades_to_empty() {
        let result = ScanResult::from_json(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(result.checks, Checks::default());
        assert_eq!(result.risk_score, None);
        assert_eq!(result.score(), 0.0);
    }

    #[test]
    fn test_parse_mistyped_sub_blocks_are_ignored() {
        let body = r#"{
            "url": "https://example.com",
            "risk_score": "high",
            "checks": {
                "ssl": "valid",
                "security_headers": {"missing_headers": "X-Frame-Options"},
                "domain_analysis": {"is_suspicious": true}
            }
        }"#;

        let result = ScanResult::from_json(body).unwrap();
        assert_eq!(result.risk_score, None);
        assert_eq!(result.checks.ssl, None);
        assert_eq!(result.checks.security_headers, None);
        assert!(result.checks.domain_analysis.unwrap().is_suspicious);
    }

    #[test]
    fn test_parse_checks_not_an_object() {
        let result = ScanResult::from_json(r#"{"url": "https://a.com", "checks": []}"#).unwrap();
        assert_eq!(result.checks, Checks::default());
    }

    #[test]
    fn test_parse_numeric_advanced_detection() {
        let body = r#"{"checks": {"advanced_detection": {"total_risk_score": 35, "risk_level": "Medium"}}}"#;
        let result = ScanResult::from_json(body).unwrap();
        let advanced = result.checks.advanced_detection.unwrap();
        assert!(advanced.warnings.is_empty());
        assert_eq!(advanced.total_risk_score, Some(35.0));
        assert!(advanced.has_findings());
    }

    #[test]
    fn test_advanced_detection_without_findings() {
        assert!(!AdvancedDetection::default().has_findings());
        assert!(!AdvancedDetection {
            warnings: vec![],
            total_risk_score: Some(0.0),
        }
        .has_findings());
    }

    #[test]
    fn test_parse_rejects_unparsable_body() {
        assert!(ScanResult::from_json("<html>502 Bad Gateway</html>").is_err());
        assert!(ScanResult::from_json("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_object_body() {
        let err = ScanResult::from_json("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("an array"));
        assert!(ScanResult::from_json("null").is_err());
    }

    #[test]
    fn test_display_domain_prefers_service_value() {
        let result = ScanResult {
            url: "https://www.example.com/login".into(),
            domain: Some("example.com".into()),
            ..Default::default()
        };
        assert_eq!(result.display_domain().as_deref(), Some("example.com"));
    }

    #[test]
    fn test_display_domain_falls_back_to_host() {
        let result = ScanResult {
            url: "https://www.example.com/login".into(),
            ..Default::default()
        };
        assert_eq!(result.display_domain().as_deref(), Some("example.com"));

        let result = ScanResult {
            url: "not a url".into(),
            ..Default::default()
        };
        assert_eq!(result.display_domain(), None);
    }

    #[test]
    fn test_history_record_accepts_warnings_alias() {
        let body = r#"{
            "scan_id": 7,
            "url": "https://example.com",
            "domain": "example.com",
            "risk_score": 80,
            "risk_level": "high",
            "warnings": ["Suspicious domain detected"],
            "timestamp": "2025-01-01T00:00:00"
        }"#;

        let record: HistoryRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.risk_level, RiskLevel::High);
        assert_eq!(record.issues, vec!["Suspicious domain detected"]);
    }

    #[test]
    fn test_history_record_requires_timestamp() {
        let missing = r#"{"url": "https://a.com", "risk_level": "Low"}"#;
        assert!(serde_json::from_str::<HistoryRecord>(missing).is_err());

        let blank = r#"{"url": "https://a.com", "risk_level": "Low", "timestamp": "  "}"#;
        assert!(serde_json::from_str::<HistoryRecord>(blank).is_err());
    }

    #[test]
    fn test_scan_request_body() {
        let request = ScanRequest {
            url: "https://example.com".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"url": "https://example.com"})
        );
    }
}
