//! Console presentation of scan outcomes.

use crate::config::OutputFormat;
use crate::error_handling::ScanError;
use crate::export::{render_json, render_text};
use crate::scan::{ScanObserver, ScanReport};

/// Prints each finished scan to stdout and each failure to stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsolePrinter {
    format: OutputFormat,
}

impl ConsolePrinter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// The text printed for a successful scan.
    pub fn render(&self, report: &ScanReport) -> String {
        match self.format {
            OutputFormat::Text => render_text(report),
            OutputFormat::Json => render_json(report).unwrap_or_else(|e| {
                log::error!("Failed to serialize report for {}: {e}", report.record.url);
                String::new()
            }),
        }
    }
}

impl ScanObserver for ConsolePrinter {
    fn on_report(&self, report: &ScanReport) {
        let rendered = self.render(report);
        if !rendered.is_empty() {
            println!("{rendered}");
        }
    }

    fn on_error(&self, _scan_id: u64, input: &str, error: &ScanError) {
        eprintln!("✗ {input}: {error}");
    }
}
