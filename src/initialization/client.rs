//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes the shared HTTP client used for all calls to the scanning service.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - TCP connect timeout (`TCP_CONNECT_TIMEOUT_SECS`)
/// - Rustls TLS backend (no native TLS)
///
/// No overall request timeout is set here: the per-scan timeout is enforced by
/// the scan orchestrator, which abandons the request when it elapses.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
