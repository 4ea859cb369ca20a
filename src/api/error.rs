//! API Error Types
//!
//! Distinguishes the three ways a backend call can fail, keyed off the
//! HTTP exchange: the request never made it out, the server rejected it,
//! or the body came back in an unexpected shape.

use thiserror::Error;

/// Errors raised by the HTTP client facade
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never reached the server (connectivity, CORS, aborted fetch)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Response body was not in the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type alias for facade operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = ApiError::Server {
            status: 503,
            message: "no model loaded".to_string(),
        };
        assert_eq!(err.to_string(), "Server error 503: no model loaded");

        let err = ApiError::Decode("missing field `model_details`".to_string());
        assert_eq!(err.to_string(), "Decode error: missing field `model_details`");
    }

    #[test]
    fn test_variants_are_distinct() {
        let network = ApiError::Network("x".to_string());
        let server = ApiError::Server {
            status: 500,
            message: "x".to_string(),
        };
        let decode = ApiError::Decode("x".to_string());
        assert_ne!(network, server);
        assert_ne!(server, decode);
        assert_ne!(network, decode);
    }
}
