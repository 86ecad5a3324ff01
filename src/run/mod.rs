//! Batch scan runs.
//!
//! A run initializes the shared resources once (HTTP client, history seeded
//! from the recent-scans endpoint), then pushes every input through one
//! [`ScanOrchestrator`] with at most `max_concurrency` scans in flight.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use log::info;
use tokio_util::sync::CancellationToken;

use crate::app::print_scan_statistics;
use crate::config::Config;
use crate::error_handling::{FailureKind, ScanStats};
use crate::history::HistoryStore;
use crate::initialization::{init_client, init_history};
use crate::models::HistoryRecord;
use crate::scan::{ScanObserver, ScanOrchestrator};

/// Results of a batch run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of inputs attempted
    pub total_urls: usize,
    /// Number of scans that produced a report
    pub successful: usize,
    /// Number of scans that failed, including cancelled ones
    pub failed: usize,
    /// Number of scans abandoned because the run was cancelled
    pub cancelled: usize,
    /// History at the end of the run, newest first
    pub history: Vec<HistoryRecord>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Scans every input and returns a summary.
///
/// Per-scan failures never abort the run: they are reported through
/// `observer` and counted in the returned report. Results are delivered in
/// input order.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be built.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use phish_scan::{run, Config, NoopObserver};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> anyhow::Result<()> {
/// let inputs = vec!["https://example.com".to_string()];
/// let report = run(Config::default(), inputs, Arc::new(NoopObserver), CancellationToken::new()).await?;
/// println!("{} succeeded, {} failed", report.successful, report.failed);
/// # Ok(())
/// # }
/// ```
pub async fn run(
    config: Config,
    inputs: Vec<String>,
    observer: Arc<dyn ScanObserver>,
    cancel: CancellationToken,
) -> Result<RunReport> {
    let start_time = Instant::now();

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let history: Arc<HistoryStore> = init_history(&client, &config).await;
    let stats = Arc::new(ScanStats::new());

    let orchestrator = ScanOrchestrator::new(client, &config, Arc::clone(&history))
        .with_observer(observer)
        .with_stats(Arc::clone(&stats));

    info!(
        "Scanning {} URL(s) via {} (concurrency {}, timeout {}ms)",
        inputs.len(),
        config.scan_endpoint,
        config.max_concurrency,
        config.timeout.as_millis()
    );

    let orchestrator = &orchestrator;
    let cancel = &cancel;
    let outcomes: Vec<_> = stream::iter(inputs.iter())
        .map(move |input| orchestrator.scan_with_cancel(input, cancel))
        .buffered(config.max_concurrency.max(1))
        .collect()
        .await;

    let successful = outcomes.iter().filter(|o| o.is_ok()).count();
    let elapsed_seconds = start_time.elapsed().as_secs_f64();

    print_scan_statistics(&stats);

    Ok(RunReport {
        total_urls: outcomes.len(),
        successful,
        failed: outcomes.len() - successful,
        cancelled: stats.failure_count(FailureKind::Cancelled),
        history: history.list(None),
        elapsed_seconds,
    })
}
