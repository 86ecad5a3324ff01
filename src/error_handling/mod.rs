//! Error handling and scan statistics.
//!
//! This module provides:
//! - The `ScanError` type and its `FailureKind` categories
//! - Initialization error types
//! - Human-readable categorization of transport errors
//! - Outcome statistics tracking (successes and failures per kind)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::describe_reqwest_error;
pub use stats::ScanStats;
pub use types::{FailureKind, InitializationError, ScanError};
