//! Warning and recommendation derivation.
//!
//! Turns a scan result into the ordered lists shown to the user. Rules run in a
//! fixed order (SSL, headers, domain, advanced detection) and the output keeps
//! that order, since callers render warnings top to bottom.

use serde::Serialize;

use crate::heuristics;
use crate::models::ScanResult;

pub const SSL_WARNING: &str = "No HTTPS / Invalid SSL certificate";
pub const SSL_RECOMMENDATION: &str = "Enable HTTPS and fix SSL certificate";
pub const HEADERS_RECOMMENDATION: &str = "Add missing security headers";
pub const DOMAIN_WARNING: &str = "Suspicious domain detected";
pub const DOMAIN_RECOMMENDATION: &str = "Check domain carefully";
pub const ADVANCED_RECOMMENDATION: &str = "Investigate advanced detection issues";

/// Human-facing findings derived from one scan result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Analysis {
    fn add(&mut self, warning: impl Into<String>, recommendation: &str) {
        self.warnings.push(warning.into());
        self.recommendations.push(recommendation.to_string());
    }
}

/// Derives warnings and recommendations from a scan result.
///
/// A missing sub-block never fails; the rule that reads it simply does not
/// fire, except for SSL where a missing block counts as an invalid certificate.
pub fn analyze(result: &ScanResult) -> Analysis {
    let mut analysis = Analysis::default();
    let checks = &result.checks;

    let certificate_valid = checks.ssl.as_ref().is_some_and(|ssl| ssl.certificate_valid);
    if !certificate_valid {
        analysis.add(SSL_WARNING, SSL_RECOMMENDATION);
    }

    if let Some(headers) = checks
        .security_headers
        .as_ref()
        .filter(|h| !h.missing_headers.is_empty())
    {
        analysis.add(
            format!(
                "Missing security headers: {}",
                headers.missing_headers.join(", ")
            ),
            HEADERS_RECOMMENDATION,
        );
    }

    if checks
        .domain_analysis
        .as_ref()
        .is_some_and(|domain| domain.is_suspicious)
    {
        analysis.add(DOMAIN_WARNING, DOMAIN_RECOMMENDATION);
    }

    let advanced = advanced_warnings(result);
    if !advanced.is_empty() {
        analysis.warnings.extend(advanced);
        analysis
            .recommendations
            .push(ADVANCED_RECOMMENDATION.to_string());
    }

    analysis
}

/// Advanced-detection warnings for a result.
///
/// Uses the service's warning list when it is non-empty. A service that only
/// reports a positive `total_risk_score` yields one synthesized warning.
/// Otherwise the local heuristics are run against the result URL.
pub fn advanced_warnings(result: &ScanResult) -> Vec<String> {
    match result
        .checks
        .advanced_detection
        .as_ref()
        .filter(|advanced| advanced.has_findings())
    {
        Some(advanced) if !advanced.warnings.is_empty() => advanced.warnings.clone(),
        // Findings without warnings means a positive numeric score
        Some(advanced) => vec![score_warning(advanced.total_risk_score.unwrap_or_default())],
        None => heuristics::detect(&result.url),
    }
}

pub fn score_warning(score: f64) -> String {
    format!("Advanced detection risk score: {score}")
}
