//! Error category classification.
//!
//! Categories drive what the status bar tells the user and whether a failed
//! request is worth dispatching again.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Backend unreachable, connection refused, timeouts.
    Network,

    /// The backend answered with a server-side failure (HTTP 5xx), including
    /// a database the backend could not connect to.
    Server,

    /// The backend rejected the request (HTTP 4xx) or sent a body we could
    /// not decode.
    Client,

    /// Local configuration is missing or invalid.
    Configuration,

    /// Filesystem / OS errors.
    System,
}

impl ErrorCategory {
    /// Returns true if a later dispatch of the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the EAV backend is running and reachable",
            ErrorCategory::Server => "Check the backend logs and the database settings",
            ErrorCategory::Client => "The backend rejected the request; check the connection settings",
            ErrorCategory::Configuration => "Check ~/.eavtui/config.json and the EAV_* environment variables",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_retryable() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::Client.is_retryable());
        assert!(!ErrorCategory::Configuration.is_retryable());
        assert!(!ErrorCategory::System.is_retryable());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Network.to_string(), "network");
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
    }

    #[test]
    fn test_every_category_has_a_hint() {
        for category in [
            ErrorCategory::Network,
            ErrorCategory::Server,
            ErrorCategory::Client,
            ErrorCategory::Configuration,
            ErrorCategory::System,
        ] {
            assert!(!category.recovery_hint().is_empty());
        }
    }
}
