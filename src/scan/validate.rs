//! Scan input validation.

use url::Url;

use crate::error_handling::ScanError;

/// Validates user input before any request is sent.
///
/// The input is trimmed and must be non-empty and parse as an absolute
/// `http`/`https` URL with a host. On success the trimmed input is returned
/// unchanged (not re-serialized by the parser), so the value sent to the
/// service and stored in history is exactly what the user entered.
///
/// # Errors
///
/// Returns `ScanError::InvalidInput` describing why the input was rejected.
pub fn validate_scan_input(input: &str) -> Result<String, ScanError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScanError::InvalidInput("Please enter a URL".to_string()));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| ScanError::InvalidInput(format!("{trimmed} ({e})")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ScanError::InvalidInput(format!(
                "{trimmed} (unsupported scheme '{scheme}', only http and https are allowed)"
            )));
        }
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ScanError::InvalidInput(format!(
            "{trimmed} (URL has no host)"
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_absolute_urls() {
        assert_eq!(
            validate_scan_input("https://example.com").unwrap(),
            "https://example.com"
        );
        assert_eq!(
            validate_scan_input("http://192.168.1.1/login").unwrap(),
            "http://192.168.1.1/login"
        );
        assert_eq!(
            validate_scan_input("https://[2001:db8::1]:8080/path").unwrap(),
            "https://[2001:db8::1]:8080/path"
        );
    }

    #[test]
    fn test_validate_trims_but_does_not_normalize() {
        // The parser would add a trailing slash; the captured value must not change
        assert_eq!(
            validate_scan_input("  https://Example.com  ").unwrap(),
            "https://Example.com"
        );
    }

    #[test]
    fn test_validate_rejects_empty_and_whitespace() {
        for input in ["", "   ", "\t\n"] {
            let err = validate_scan_input(input).unwrap_err();
            assert_eq!(err, ScanError::InvalidInput("Please enter a URL".to_string()));
        }
    }

    #[test]
    fn test_validate_rejects_relative_urls() {
        // No scheme means no absolute URL; nothing is prepended
        assert!(matches!(
            validate_scan_input("example.com"),
            Err(ScanError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_scan_input("/login"),
            Err(ScanError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_scan_input("not a url at all!!!"),
            Err(ScanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unsupported_schemes() {
        for input in ["ftp://example.com", "mailto:user@example.com", "file:///etc/passwd"] {
            let err = validate_scan_input(input).unwrap_err();
            assert!(
                err.to_string().contains("unsupported scheme"),
                "{input}: {err}"
            );
        }
    }
}
