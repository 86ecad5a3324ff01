//! Scan lifecycle states and the presentation callback trait.

use crate::error_handling::{FailureKind, ScanError};

use super::ScanReport;

/// Lifecycle of one scan.
///
/// `Idle → Validating → InFlight → {Succeeded | Failed(kind)} → Idle`.
/// Input rejected during validation goes straight to `Failed(InvalidInput)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Validating,
    InFlight,
    Succeeded,
    Failed(FailureKind),
}

impl ScanState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScanState::Succeeded | ScanState::Failed(_))
    }
}

impl std::fmt::Display for ScanState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanState::Idle => f.write_str("idle"),
            ScanState::Validating => f.write_str("validating"),
            ScanState::InFlight => f.write_str("in flight"),
            ScanState::Succeeded => f.write_str("succeeded"),
            ScanState::Failed(kind) => write!(f, "failed ({kind})"),
        }
    }
}

/// Receives scan progress and outcomes for display.
///
/// Callbacks run on the task performing the scan, after the history upsert
/// for successful scans. Each scan produces exactly one of `on_report` or
/// `on_error`. All methods default to doing nothing.
pub trait ScanObserver: Send + Sync {
    /// Called on every state transition of scan `scan_id`.
    fn on_state(&self, _scan_id: u64, _state: ScanState) {}

    /// Called once with the finalized result of a successful scan.
    fn on_report(&self, _report: &ScanReport) {}

    /// Called once with the failure of an unsuccessful scan.
    fn on_error(&self, _scan_id: u64, _input: &str, _error: &ScanError) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
