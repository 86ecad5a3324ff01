//! Error categorization.
//!
//! Turns `reqwest` failures into short, human-readable descriptions that can be
//! shown to the user and stored with the scan outcome.

/// Describes a `reqwest::Error` with a category prefix followed by the error text.
///
/// Status errors are reported by code; everything else is categorized by the
/// stage of the request that failed.
pub fn describe_reqwest_error(error: &reqwest::Error) -> String {
    if let Some(status) = error.status() {
        return format!("HTTP {}", status.as_u16());
    }

    let category = if error.is_builder() {
        "request builder error"
    } else if error.is_redirect() {
        "redirect error"
    } else if error.is_timeout() {
        "request timed out"
    } else if error.is_connect() {
        "connection failed"
    } else if error.is_body() {
        "response body error"
    } else if error.is_decode() {
        "response decode error"
    } else if error.is_request() {
        "request error"
    } else {
        "transport error"
    };

    format!("{category}: {error}")
}
