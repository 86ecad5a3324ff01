//! Startup fetch of recent scans from the scanning service.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::HistoryRecord;

/// Fetches the most recent scans and returns at most `limit` of them.
///
/// The endpoint returns a JSON array of scan records, newest first. Entries
/// that do not look like a history record are skipped rather than failing
/// the whole fetch.
///
/// # Errors
///
/// Returns an error if the request fails, the service answers with a
/// non-success status, or the body is not a JSON array.
pub async fn fetch_recent_scans(
    client: &reqwest::Client,
    endpoint: &str,
    limit: usize,
) -> Result<Vec<HistoryRecord>> {
    let response = client
        .get(endpoint)
        .send()
        .await
        .with_context(|| format!("Failed to fetch recent scans from {endpoint}"))?
        .error_for_status()
        .with_context(|| format!("Recent scans endpoint {endpoint} returned an error"))?;

    let entries: Vec<Value> = response
        .json()
        .await
        .context("Recent scans response is not a JSON array")?;

    let records: Vec<HistoryRecord> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                log::debug!("Skipping malformed recent scan entry: {e}");
                None
            }
        })
        .take(limit)
        .collect();

    log::debug!("Loaded {} recent scans from {endpoint}", records.len());
    Ok(records)
}
