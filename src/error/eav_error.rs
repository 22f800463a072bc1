//! Unified error type for eavtui.

use std::fmt;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::network::NetworkError;
use crate::config::ConfigError;

#[derive(Debug)]
pub enum EavError {
    /// Talking to the backend failed.
    Network(NetworkError),

    /// Loading or validating configuration failed.
    Config(ConfigError),

    /// Local I/O (log file, terminal).
    Io(std::io::Error),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<EavError>,
        context: ErrorContext,
    },
}

impl EavError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EavError::Network(err) => match err {
                NetworkError::ConnectionFailed { .. } | NetworkError::Timeout { .. } => {
                    ErrorCategory::Network
                }
                NetworkError::HttpStatus { status, .. } if *status >= 500 => ErrorCategory::Server,
                NetworkError::InvalidUrl { .. } => ErrorCategory::Configuration,
                NetworkError::Other { .. } => ErrorCategory::Network,
                _ => ErrorCategory::Client,
            },
            EavError::Config(_) => ErrorCategory::Configuration,
            EavError::Io(_) => ErrorCategory::System,
            EavError::WithContext { error, .. } => error.category(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            EavError::Network(err) => err.is_retryable(),
            EavError::Config(_) => false,
            EavError::Io(_) => false,
            EavError::WithContext { error, .. } => error.is_retryable(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            EavError::Network(err) => err.user_message(),
            EavError::Config(err) => err.to_string(),
            EavError::Io(err) => format!("I/O error: {}", err),
            EavError::WithContext { error, .. } => error.user_message(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EavError::Network(err) => err.error_code(),
            EavError::Config(_) => "E_CONFIG",
            EavError::Io(_) => "E_IO",
            EavError::WithContext { error, .. } => error.error_code(),
        }
    }

    pub fn with_context(self, ctx: ErrorContext) -> Self {
        EavError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            EavError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// The innermost error, skipping any context wrappers.
    pub fn inner(&self) -> &EavError {
        match self {
            EavError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for EavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EavError::Network(err) => write!(f, "{}", err),
            EavError::Config(err) => write!(f, "{}", err),
            EavError::Io(err) => write!(f, "I/O error: {}", err),
            EavError::WithContext { error, context } => write!(f, "{} ({})", error, context),
        }
    }
}

impl std::error::Error for EavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EavError::Network(err) => Some(err),
            EavError::Config(err) => Some(err),
            EavError::Io(err) => Some(err),
            EavError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<NetworkError> for EavError {
    fn from(err: NetworkError) -> Self {
        EavError::Network(err)
    }
}

impl From<ConfigError> for EavError {
    fn from(err: ConfigError) -> Self {
        EavError::Config(err)
    }
}

impl From<std::io::Error> for EavError {
    fn from(err: std::io::Error) -> Self {
        EavError::Io(err)
    }
}

impl From<serde_json::Error> for EavError {
    fn from(err: serde_json::Error) -> Self {
        EavError::Network(NetworkError::InvalidResponse {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_network_categories() {
        let refused: EavError = NetworkError::ConnectionFailed {
            url: "http://localhost:8080".to_string(),
            message: "refused".to_string(),
        }
        .into();
        assert_eq!(refused.category(), ErrorCategory::Network);
        assert!(refused.is_retryable());

        let db_down: EavError = NetworkError::HttpStatus {
            status: 500,
            message: "Could not connect to DB".to_string(),
        }
        .into();
        assert_eq!(db_down.category(), ErrorCategory::Server);

        let missing_info: EavError = NetworkError::HttpStatus {
            status: 400,
            message: "Missing required info".to_string(),
        }
        .into();
        assert_eq!(missing_info.category(), ErrorCategory::Client);
        assert!(!missing_info.is_retryable());
    }

    #[test]
    fn test_config_error_category() {
        let err: EavError = ConfigError::MissingDatabase.into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.error_code(), "E_CONFIG");
    }

    #[test]
    fn test_context_wrapping_preserves_classification() {
        let err: EavError = NetworkError::Timeout {
            operation: "connect".to_string(),
        }
        .into();
        let wrapped = err.with_context(ErrorContext::new("connect").with_component("effects"));

        assert_eq!(wrapped.category(), ErrorCategory::Network);
        assert_eq!(wrapped.error_code(), "E_NET_TIMEOUT");
        assert_eq!(wrapped.context().map(|c| c.operation.as_str()), Some("connect"));
        assert!(matches!(wrapped.inner(), EavError::Network(_)));
        assert!(wrapped.to_string().contains("[connect]"));
        assert!(wrapped.source().is_some());
    }

    #[test]
    fn test_serde_error_becomes_invalid_response() {
        let json_err = serde_json::from_str::<Vec<i64>>("not json").unwrap_err();
        let err: EavError = json_err.into();
        assert_eq!(err.error_code(), "E_NET_INVALID");
    }
}
