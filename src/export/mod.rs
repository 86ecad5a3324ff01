//! Report rendering for finished scans.
//!
//! This module renders a `ScanReport` into the formats the CLI can print:
//! a plain-text report for terminals and pretty JSON for piping to `jq`.

mod json;
mod text;

pub use json::render_json;
pub use text::{check_lines, render_text};
