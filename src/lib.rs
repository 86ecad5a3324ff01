//! phish_scan library: client for a phishing-risk scanning service
//!
//! This library submits URLs to a remote scanning service, races each request
//! against a timeout, supplements the service verdict with local URL
//! heuristics, derives warnings and recommendations, and keeps a deduplicated
//! in-memory history of finished scans.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use phish_scan::{Config, HistoryStore, ScanOrchestrator};
//! use phish_scan::initialization::init_client;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_client(&config)?;
//! let orchestrator = ScanOrchestrator::new(client, &config, Arc::new(HistoryStore::new()));
//!
//! let report = orchestrator.scan("https://example.com/login").await?;
//! println!("{} is {} risk", report.record.url, report.record.risk_level);
//! for warning in &report.analysis.warnings {
//!     println!("- {warning}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod analysis;
pub mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod heuristics;
pub mod history;
pub mod initialization;
pub mod models;
pub mod risk;
mod run;
pub mod scan;

// Re-export public API
pub use analysis::{analyze, Analysis};
pub use config::{Config, LogFormat, LogLevel, Opt, OutputFormat};
pub use error_handling::{FailureKind, ScanError, ScanStats};
pub use heuristics::detect;
pub use history::HistoryStore;
pub use models::{HistoryRecord, ScanResult};
pub use risk::{classify, RiskLevel};
pub use run::{run, RunReport};
pub use scan::{NoopObserver, ScanObserver, ScanOrchestrator, ScanReport, ScanState};
