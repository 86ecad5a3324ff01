//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_SCANS_ENDPOINT, DEFAULT_SCAN_ENDPOINT, DEFAULT_USER_AGENT,
    RECENT_SCANS_LIMIT, SCAN_TIMEOUT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How finished scans are printed by the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text report
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use phish_scan::Config;
/// use std::time::Duration;
///
/// let config = Config {
///     scan_endpoint: "http://scanner.internal/api/scan".to_string(),
///     timeout: Duration::from_secs(5),
///     ..Default::default()
/// };
/// assert_eq!(config.recent_limit, 5);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint receiving `POST {"url": ...}` scan requests
    pub scan_endpoint: String,

    /// Endpoint listing recent scans (`None` skips the startup fetch)
    pub scans_endpoint: Option<String>,

    /// Time allowed for a single scan before it is abandoned
    pub timeout: Duration,

    /// Number of recent scans used to seed the history view
    pub recent_limit: usize,

    /// Maximum scans in flight at once for batch runs
    pub max_concurrency: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_endpoint: DEFAULT_SCAN_ENDPOINT.to_string(),
            scans_endpoint: Some(DEFAULT_SCANS_ENDPOINT.to_string()),
            timeout: SCAN_TIMEOUT,
            recent_limit: RECENT_SCANS_LIMIT,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options for the `phish_scan` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "phish_scan",
    version,
    about = "Scan URLs for phishing risk using a remote analysis service"
)]
pub struct Opt {
    /// URLs to scan. Use `-` to read one URL per line from stdin.
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Scan endpoint URL
    #[arg(long, env = "PHISH_SCAN_ENDPOINT", default_value = DEFAULT_SCAN_ENDPOINT)]
    pub scan_endpoint: String,

    /// Recent-scans endpoint URL
    #[arg(long, env = "PHISH_SCANS_ENDPOINT", default_value = DEFAULT_SCANS_ENDPOINT)]
    pub scans_endpoint: String,

    /// Skip loading recent scans at startup
    #[arg(long)]
    pub no_recent: bool,

    /// Per-scan timeout in milliseconds
    #[arg(long, env = "PHISH_SCAN_TIMEOUT_MS", default_value_t = SCAN_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// Maximum number of scans in flight at once
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub concurrency: usize,

    /// Print the N most recent history entries after the run
    #[arg(long, value_name = "N")]
    pub history: Option<usize>,

    /// Report output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            scan_endpoint: opt.scan_endpoint.clone(),
            scans_endpoint: (!opt.no_recent).then(|| opt.scans_endpoint.clone()),
            timeout: Duration::from_millis(opt.timeout_ms),
            recent_limit: RECENT_SCANS_LIMIT,
            max_concurrency: opt.concurrency.max(1),
            user_agent: opt.user_agent.clone(),
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
        }
    }
}
