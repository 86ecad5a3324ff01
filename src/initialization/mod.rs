//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - The logger
//! - The HTTP client used to reach the scanning service
//! - The history store, seeded from the recent-scans endpoint
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use log::{info, warn};

use crate::config::Config;
use crate::history::{fetch_recent_scans, HistoryStore};

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Creates the session's history store and seeds it with recent scans.
///
/// The recent-scans endpoint is queried once. A failed fetch is logged and
/// leaves the store empty; it never prevents scanning.
pub async fn init_history(client: &reqwest::Client, config: &Config) -> Arc<HistoryStore> {
    let history = Arc::new(HistoryStore::new());

    let Some(endpoint) = config.scans_endpoint.as_deref() else {
        return history;
    };

    match fetch_recent_scans(client, endpoint, config.recent_limit).await {
        Ok(records) => {
            let added = history.seed(records);
            info!("Loaded {added} recent scan(s) into history");
        }
        Err(e) => {
            warn!("Failed to load recent scans: {e:#}. Starting with empty history.");
        }
    }

    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_init_history_seeds_recent_scans() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/scans")).respond_with(
                json_encoded(json!([
                    {"url": "https://a.com", "risk_level": "Low", "timestamp": "t1", "warnings": []},
                    {"url": "https://b.com", "risk_level": "High", "timestamp": "t2", "warnings": ["x"]}
                ])),
            ),
        );

        let config = Config {
            scans_endpoint: Some(server.url("/api/scans").to_string()),
            ..Default::default()
        };
        let client = reqwest::Client::new();
        let history = init_history(&client, &config).await;

        let urls: Vec<_> = history.list(None).into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
    }

    #[tokio::test]
    async fn test_init_history_tolerates_fetch_failure() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/scans"))
                .respond_with(status_code(500)),
        );

        let config = Config {
            scans_endpoint: Some(server.url("/api/scans").to_string()),
            ..Default::default()
        };
        let history = init_history(&reqwest::Client::new(), &config).await;
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_init_history_without_endpoint() {
        let config = Config {
            scans_endpoint: None,
            ..Default::default()
        };
        let history = init_history(&reqwest::Client::new(), &config).await;
        assert!(history.is_empty());
    }
}
