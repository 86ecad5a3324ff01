//! Configuration constants.
//!
//! This module defines the constants used throughout the application: service
//! endpoints, timeouts, risk thresholds, and the heuristic rule parameters.

use std::time::Duration;

// Scanning service endpoints (used as defaults)
/// Endpoint that accepts `POST {"url": ...}` and returns a scan result.
pub const DEFAULT_SCAN_ENDPOINT: &str = "http://127.0.0.1:8000/api/scan";
/// Endpoint that returns the most recent scans as a JSON array.
pub const DEFAULT_SCANS_ENDPOINT: &str = "http://127.0.0.1:8000/api/scans";

/// Per-scan timeout. The network call is raced against this window and
/// abandoned when the window elapses first.
pub const SCAN_TIMEOUT: Duration = Duration::from_millis(20_000);
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Number of records taken from the recent-scans endpoint at startup.
pub const RECENT_SCANS_LIMIT: usize = 5;

/// Maximum number of scans in flight at once when scanning a batch of URLs.
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// User-Agent sent with every request to the scanning service.
pub const DEFAULT_USER_AGENT: &str = concat!("phish_scan/", env!("CARGO_PKG_VERSION"));

// Risk classification
/// Highest score (inclusive) classified as Low risk.
pub const LOW_RISK_MAX_SCORE: f64 = 30.0;
/// Highest score (inclusive) classified as Medium risk.
pub const MEDIUM_RISK_MAX_SCORE: f64 = 70.0;

// Heuristic detection
/// Keywords that commonly appear in phishing URLs, checked in this order.
pub const SUSPICIOUS_KEYWORDS: [&str; 6] =
    ["login", "verify", "secure", "account", "bank", "password"];
/// URLs longer than this many characters are flagged.
pub const SUSPICIOUS_URL_LENGTH: usize = 100;

/// Precision of locally generated ISO-8601 timestamps.
pub const TIMESTAMP_PRECISION: chrono::SecondsFormat = chrono::SecondsFormat::Millis;
