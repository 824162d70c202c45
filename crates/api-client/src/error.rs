//! Error types for the API client

use serde_json::Value;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Message substituted when an error response body is not valid JSON
pub const FALLBACK_ERROR_MESSAGE: &str = "an unexpected error occurred";

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure, passed through from the HTTP stack unmodified
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a status code of 400 or above
    ///
    /// `message` is the response body parsed as JSON, or
    /// [`FALLBACK_ERROR_MESSAGE`] when the body is not valid JSON.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error payload returned by the backend
        message: Value,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session store failure during client construction
    #[error("Session store error: {0}")]
    Session(#[from] crate::session::SessionError),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build the error envelope for a non-success response
    ///
    /// The body is parsed as JSON so callers can inspect structured backend
    /// errors; anything unparseable collapses to the fixed fallback string.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str(body)
            .unwrap_or_else(|_| Value::String(FALLBACK_ERROR_MESSAGE.to_string()));
        Self::Api { status, message }
    }

    /// HTTP status code of the failure, when the backend produced one
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Config(_) | Self::Session(_) => None,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_parses_json_body() {
        let err = ApiError::from_response(404, r#"{"error":"not found"}"#);

        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message["error"], "not found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_response_falls_back_on_invalid_json() {
        let err = ApiError::from_response(500, "Internal Server Error");

        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, Value::String(FALLBACK_ERROR_MESSAGE.to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_response_accepts_plain_json_string() {
        // response.json() semantics: a quoted string is valid JSON
        let err = ApiError::from_response(400, r#""bad request""#);
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_client_and_server_error_classification() {
        let client = ApiError::from_response(422, "{}");
        assert!(client.is_client_error());
        assert!(!client.is_server_error());

        let server = ApiError::from_response(503, "{}");
        assert!(server.is_server_error());
        assert!(!server.is_client_error());

        let config = ApiError::config("bad url");
        assert!(!config.is_client_error());
        assert!(!config.is_server_error());
        assert_eq!(config.status(), None);
    }

    #[test]
    fn test_display_includes_status_and_message() {
        let err = ApiError::from_response(404, r#"{"error":"not found"}"#);
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
    }
}
