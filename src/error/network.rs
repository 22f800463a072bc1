//! Errors raised while talking to the EAV backend.

use std::fmt;

use crate::traits::HttpError;

/// Network and HTTP failures.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Could not reach the backend at all.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { operation: String },

    /// Non-2xx response. `message` is the response body, which the backend
    /// fills with a human readable reason (`Missing required info`,
    /// `Could not connect to DB`).
    HttpStatus { status: u16, message: String },

    /// Response body did not match the expected JSON shape.
    InvalidResponse { message: String },

    /// The URL could not be built from the configured base.
    InvalidUrl { url: String },

    Other { message: String },
}

impl NetworkError {
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => *status >= 500 || *status == 408,
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Text suitable for the status bar.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { url, .. } => {
                format!("Unable to reach the EAV backend at {}", url)
            }
            NetworkError::Timeout { operation } => format!("{} timed out", operation),
            NetworkError::HttpStatus { status, message } => {
                let reason = message.trim();
                match (*status, reason.is_empty()) {
                    (400, true) => "The backend rejected the request".to_string(),
                    (404, true) => "The requested resource was not found".to_string(),
                    (500..=599, true) => "The backend reported an internal error".to_string(),
                    (_, true) => format!("The backend returned HTTP {}", status),
                    (_, false) => format!("{} (HTTP {})", reason, status),
                }
            }
            NetworkError::InvalidResponse { .. } => {
                "Received an unexpected response from the backend".to_string()
            }
            NetworkError::InvalidUrl { url } => format!("Invalid backend URL: {}", url),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { operation } => write!(f, "{} timed out", operation),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::InvalidResponse { message } => write!(f, "Invalid response: {}", message),
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a transport-level [`HttpError`] for the request to `url`.
pub fn classify_http_error(err: HttpError, url: &str, operation: &str) -> NetworkError {
    match err {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
            url: url.to_string(),
            message,
        },
        HttpError::Timeout(_) => NetworkError::Timeout {
            operation: operation.to_string(),
        },
        HttpError::ServerError { status, message } => NetworkError::HttpStatus { status, message },
        HttpError::InvalidUrl(url) => NetworkError::InvalidUrl { url },
        HttpError::Io(message) | HttpError::Other(message) => NetworkError::Other { message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_is_retryable() {
        let err = NetworkError::ConnectionFailed {
            url: "http://localhost:8080".to_string(),
            message: "Connection refused".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_NET_CONN");
        assert!(err.user_message().contains("localhost:8080"));
    }

    #[test]
    fn test_http_status_retryable_only_for_server_errors() {
        let server = NetworkError::HttpStatus {
            status: 500,
            message: "Could not connect to DB".to_string(),
        };
        assert!(server.is_retryable());

        let client = NetworkError::HttpStatus {
            status: 400,
            message: "Missing required info".to_string(),
        };
        assert!(!client.is_retryable());
    }

    #[test]
    fn test_user_message_prefers_backend_reason() {
        let err = NetworkError::HttpStatus {
            status: 500,
            message: "Could not connect to DB".to_string(),
        };
        assert_eq!(err.user_message(), "Could not connect to DB (HTTP 500)");

        let bare = NetworkError::HttpStatus {
            status: 503,
            message: "  ".to_string(),
        };
        assert_eq!(bare.user_message(), "The backend reported an internal error");
    }

    #[test]
    fn test_classify_http_error() {
        let err = classify_http_error(
            HttpError::ConnectionFailed("refused".to_string()),
            "http://localhost:8080/connect",
            "connect",
        );
        assert_eq!(
            err,
            NetworkError::ConnectionFailed {
                url: "http://localhost:8080/connect".to_string(),
                message: "refused".to_string(),
            }
        );

        let err = classify_http_error(HttpError::Timeout("30s".to_string()), "u", "fetch entity types");
        assert_eq!(
            err,
            NetworkError::Timeout {
                operation: "fetch entity types".to_string()
            }
        );
    }

    #[test]
    fn test_display_format() {
        let err = NetworkError::HttpStatus {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 error: Not Found");
    }
}
