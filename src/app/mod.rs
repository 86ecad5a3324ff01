//! Main application modules.
//!
//! This module provides URL input reading, console output of scan outcomes,
//! and statistics printing used by the main application.

pub mod input;
pub mod printer;
pub mod statistics;

// Re-export public API
pub use input::{read_input_urls, read_url_lines};
pub use printer::ConsolePrinter;
pub use statistics::{history_lines, print_history, print_scan_statistics};
