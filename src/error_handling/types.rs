//! Error type definitions.
//!
//! This module defines the scan failure type, its outcome categories, and the
//! initialization errors raised while setting up shared resources.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Terminal failure of a single scan.
///
/// Every variant is final for the scan that produced it; nothing is retried.
/// The `Display` output is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Input was empty or not an absolute http(s) URL. No request was sent.
    #[error("Invalid URL: {0}")]
    InvalidInput(String),

    /// The service did not answer within the timeout window.
    #[error("Scan timed out after {} seconds. Please try again.", .0.as_secs_f64())]
    Timeout(Duration),

    /// The service answered with a non-success status code.
    #[error("Scan service returned HTTP {0}")]
    HttpStatus(u16),

    /// The request failed below HTTP (connect, TLS, body read, ...).
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body could not be interpreted as a scan result.
    #[error("Malformed response from scan service: {0}")]
    MalformedResponse(String),

    /// The caller abandoned the scan before it finished.
    #[error("Scan cancelled")]
    Cancelled,
}

impl ScanError {
    /// Builds a `Transport` error from a `reqwest` failure.
    pub fn from_transport(error: &ReqwestError) -> Self {
        ScanError::Transport(super::categorization::describe_reqwest_error(error))
    }

    /// Outcome category used for state reporting and statistics.
    pub fn kind(&self) -> FailureKind {
        match self {
            ScanError::InvalidInput(_) => FailureKind::InvalidInput,
            ScanError::Timeout(_) => FailureKind::Timeout,
            ScanError::HttpStatus(_) | ScanError::Transport(_) => FailureKind::NetworkError,
            ScanError::MalformedResponse(_) => FailureKind::MalformedResponse,
            ScanError::Cancelled => FailureKind::Cancelled,
        }
    }
}

/// Categories of scan failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    InvalidInput,
    Timeout,
    NetworkError,
    MalformedResponse,
    Cancelled,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InvalidInput => "Invalid input",
            FailureKind::Timeout => "Timeout",
            FailureKind::NetworkError => "Network error",
            FailureKind::MalformedResponse => "Malformed response",
            FailureKind::Cancelled => "Cancelled",
        }
    }
}
