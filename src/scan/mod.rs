//! Scan orchestration.
//!
//! A scan runs through a fixed sequence: input validation, one request to the
//! scanning service raced against the timeout, heuristic fallback, analysis,
//! history upsert, and finally the presentation callback. Each scan reaches
//! exactly one terminal outcome.
//!
//! The race uses `tokio::time::timeout`. When the timer wins, the request
//! future is dropped, which aborts the in-flight HTTP call; its response can
//! never be observed. When the response wins, the timer is dropped with it.

mod state;
mod validate;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, info, warn};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::analysis::{analyze, Analysis};
use crate::config::{Config, TIMESTAMP_PRECISION};
use crate::error_handling::{ScanError, ScanStats};
use crate::heuristics;
use crate::history::HistoryStore;
use crate::models::{AdvancedDetection, HistoryRecord, ScanRequest, ScanResult};
use crate::risk::classify_optional;

pub use state::{NoopObserver, ScanObserver, ScanState};
pub use validate::validate_scan_input;

/// Everything a presentation layer needs after a successful scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub scan_id: u64,
    /// Service result with the heuristic fallback merged in
    pub result: ScanResult,
    pub analysis: Analysis,
    /// Record upserted into the history store
    pub record: HistoryRecord,
}

/// Owns the request lifecycle of every scan.
///
/// Scans are not serialized: `scan` may be called again (or concurrently)
/// while an earlier scan is in flight. Each scan captures its URL during
/// validation and only that value reaches the history store.
pub struct ScanOrchestrator {
    client: Arc<reqwest::Client>,
    scan_endpoint: String,
    timeout: Duration,
    history: Arc<HistoryStore>,
    stats: Arc<ScanStats>,
    observer: Arc<dyn ScanObserver>,
    next_scan_id: AtomicU64,
    last_error: Mutex<Option<ScanError>>,
}

impl ScanOrchestrator {
    pub fn new(client: Arc<reqwest::Client>, config: &Config, history: Arc<HistoryStore>) -> Self {
        Self {
            client,
            scan_endpoint: config.scan_endpoint.clone(),
            timeout: config.timeout,
            history,
            stats: Arc::new(ScanStats::new()),
            observer: Arc::new(NoopObserver),
            next_scan_id: AtomicU64::new(0),
            last_error: Mutex::new(None),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ScanObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_stats(mut self, stats: Arc<ScanStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn history(&self) -> &Arc<HistoryStore> {
        &self.history
    }

    pub fn stats(&self) -> &Arc<ScanStats> {
        &self.stats
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Error of the most recent failed scan, until cleared or a new scan starts.
    pub fn last_error(&self) -> Option<ScanError> {
        self.last_error_slot().clone()
    }

    pub fn clear_error(&self) {
        *self.last_error_slot() = None;
    }

    /// Scans `input` and records the outcome.
    ///
    /// # Errors
    ///
    /// Returns the scan's terminal failure. Failures are also logged, counted,
    /// kept as `last_error`, and passed to the observer.
    pub async fn scan(&self, input: &str) -> Result<ScanReport, ScanError> {
        self.scan_with_cancel(input, &CancellationToken::new()).await
    }

    /// Like [`scan`](Self::scan), but gives up with `ScanError::Cancelled`
    /// once `cancel` is triggered. A cancelled scan records nothing.
    pub async fn scan_with_cancel(
        &self,
        input: &str,
        cancel: &CancellationToken,
    ) -> Result<ScanReport, ScanError> {
        let scan_id = self.next_scan_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.clear_error();

        let outcome = self.execute(scan_id, input, cancel).await;

        match &outcome {
            Ok(report) => {
                self.stats.record_success();
                info!(
                    "Scan {scan_id}: {} is {} risk (score {}), {} warning(s)",
                    report.record.url,
                    report.record.risk_level,
                    report.result.score(),
                    report.analysis.warnings.len()
                );
                self.transition(scan_id, ScanState::Succeeded);
                self.observer.on_report(report);
            }
            Err(error) => {
                self.stats.record_failure(error.kind());
                warn!("Scan {scan_id} failed for {:?}: {error}", input.trim());
                *self.last_error_slot() = Some(error.clone());
                self.transition(scan_id, ScanState::Failed(error.kind()));
                self.observer.on_error(scan_id, input, error);
            }
        }

        self.transition(scan_id, ScanState::Idle);
        outcome
    }

    async fn execute(
        &self,
        scan_id: u64,
        input: &str,
        cancel: &CancellationToken,
    ) -> Result<ScanReport, ScanError> {
        self.transition(scan_id, ScanState::Validating);
        let url = validate_scan_input(input)?;

        self.transition(scan_id, ScanState::InFlight);
        debug!("Scan {scan_id}: sending {url} to {}", self.scan_endpoint);

        let mut result = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ScanError::Cancelled),
            raced = tokio::time::timeout(self.timeout, self.dispatch(&url)) => match raced {
                Ok(response) => response?,
                Err(_) => return Err(ScanError::Timeout(self.timeout)),
            },
        };

        if result.url.trim().is_empty() {
            result.url = url.clone();
        }
        let result = merge_heuristic_fallback(result);
        let analysis = analyze(&result);

        let record = HistoryRecord {
            url,
            risk_level: classify_optional(result.risk_score),
            timestamp: result
                .timestamp
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(now_timestamp),
            issues: analysis.warnings.clone(),
        };
        self.history.upsert(record.clone());

        Ok(ScanReport {
            scan_id,
            result,
            analysis,
            record,
        })
    }

    async fn dispatch(&self, url: &str) -> Result<ScanResult, ScanError> {
        let request = ScanRequest {
            url: url.to_string(),
        };
        let response = self
            .client
            .post(&self.scan_endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ScanError::from_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScanError::from_transport(&e))?;
        ScanResult::from_json(&body).map_err(|e| ScanError::MalformedResponse(e.to_string()))
    }

    fn transition(&self, scan_id: u64, state: ScanState) {
        debug!("Scan {scan_id}: {state}");
        self.observer.on_state(scan_id, state);
    }

    fn last_error_slot(&self) -> std::sync::MutexGuard<'_, Option<ScanError>> {
        self.last_error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Fills `checks.advanced_detection.warnings` from the local heuristics when
/// the service reported no advanced-detection findings.
pub fn merge_heuristic_fallback(mut result: ScanResult) -> ScanResult {
    let reported = result
        .checks
        .advanced_detection
        .as_ref()
        .is_some_and(AdvancedDetection::has_findings);
    if reported {
        return result;
    }

    let fallback = heuristics::detect(&result.url);
    if !fallback.is_empty() {
        debug!(
            "Service reported no advanced findings for {}; using {} heuristic warning(s)",
            result.url,
            fallback.len()
        );
        result
            .checks
            .advanced_detection
            .get_or_insert_with(AdvancedDetection::default)
            .warnings = fallback;
    }
    result
}

fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(TIMESTAMP_PRECISION, true)
}
