//! MVG error types

use thiserror::Error;

/// Errors that can occur while talking to the MVG API
#[derive(Debug, Error)]
pub enum MvgError {
    /// Connection to the MVG API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The MVG API answered with a non-success status
    #[error("API error {status}: {body}")]
    RequestFailed {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// Failed to parse a response from the MVG API
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_display() {
        let err = MvgError::RequestFailed {
            status: 503,
            body: "Service Unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("Service Unavailable"));
    }

    #[test]
    fn test_timeout_display() {
        let err = MvgError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = MvgError::ParseError("unexpected end of input".to_string());
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_invalid_coordinates_display() {
        let err = MvgError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));
    }
}
