//! Local heuristic detection.
//!
//! When the scanning service reports no advanced-detection findings, the client
//! falls back to a small set of URL-string checks. The checks are pure: no
//! network access, no state, deterministic output order.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{SUSPICIOUS_KEYWORDS, SUSPICIOUS_URL_LENGTH};

pub const IP_DETECTED: &str = "IP detected in URL";
pub const URL_TOO_LONG: &str = "URL length > 100 characters";

// Four dot-separated groups of 1-3 ASCII digits, anywhere in the string.
static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}")
        .expect("IPv4 pattern is a valid regex")
});

/// Computes heuristic warning labels for a URL.
///
/// Rules are evaluated independently and every match is reported, in this order:
/// 1. a dotted-quad IPv4 literal anywhere in the URL
/// 2. each suspicious keyword found (case-insensitive), once per keyword, in keyword-list order
/// 3. a URL longer than 100 characters
///
/// # Examples
///
/// ```
/// use phish_scan::heuristics::detect;
///
/// assert_eq!(
///     detect("http://192.168.1.1/login"),
///     vec!["IP detected in URL", "Keyword detected: login"]
/// );
/// assert!(detect("http://example.com").is_empty());
/// ```
pub fn detect(url: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    if IPV4_PATTERN.is_match(url) {
        warnings.push(IP_DETECTED.to_string());
    }

    let lowered = url.to_lowercase();
    for keyword in SUSPICIOUS_KEYWORDS {
        if lowered.contains(keyword) {
            warnings.push(keyword_warning(keyword));
        }
    }

    // Length is measured in Unicode scalar values, not bytes or UTF-16 units.
    if url.chars().count() > SUSPICIOUS_URL_LENGTH {
        warnings.push(URL_TOO_LONG.to_string());
    }

    warnings
}

pub fn keyword_warning(keyword: &str) -> String {
    format!("Keyword detected: {keyword}")
}
