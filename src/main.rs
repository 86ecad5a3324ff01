//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phish_scan` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Ctrl-C cancellation
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use tokio_util::sync::CancellationToken;

use phish_scan::app::{print_history, read_input_urls, ConsolePrinter};
use phish_scan::initialization::init_logger_with;
use phish_scan::{run, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // so PHISH_SCAN_ENDPOINT can be set without exporting it manually.
    // Try the current directory first, then the executable's directory.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let inputs = match read_input_urls(&opt.urls).await {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("phish_scan error: {:#}", e);
            process::exit(1);
        }
    };

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted; abandoning scans in flight");
            on_interrupt.cancel();
        }
    });

    let printer = Arc::new(ConsolePrinter::new(opt.format));

    match run(config, inputs, printer, cancel).await {
        Ok(report) => {
            if let Some(limit) = opt.history {
                let shown = report.history.len().min(limit);
                print_history(&report.history[..shown]);
            }
            println!(
                "Scanned {} URL{} ({} succeeded, {} failed) in {:.1}s",
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            if report.failed > 0 {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("phish_scan error: {:#}", e);
            process::exit(1);
        }
    }
}
