use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Search unavailable: {0}")]
    SearchUnavailable(String),

    #[error("Search timed out: {0}")]
    Timeout(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Whether repeating the same request could succeed.
    ///
    /// Only transport-level failures qualify; a GraphQL error or a payload we
    /// cannot parse will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::SearchUnavailable(_) | AppError::Timeout(_) | AppError::RateLimitError(_)
        )
    }

    /// Whether this error came out of the directory search path, as opposed to
    /// local configuration.
    pub fn is_search_failure(&self) -> bool {
        !matches!(self, AppError::ValidationError(_) | AppError::ConfigError(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::SearchUnavailable("Failed to connect to directory service".to_string())
        } else if err.is_decode() {
            AppError::SerializationError(err.to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                429 => AppError::RateLimitError("Too many requests".to_string()),
                _ => AppError::SearchUnavailable(format!("HTTP {}: {}", status, err)),
            }
        } else {
            AppError::SearchUnavailable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_are_retryable() {
        assert!(AppError::SearchUnavailable("down".to_string()).is_retryable());
        assert!(AppError::Timeout("10s".to_string()).is_retryable());
        assert!(AppError::RateLimitError("429".to_string()).is_retryable());
    }

    #[test]
    fn test_payload_errors_are_not_retryable() {
        assert!(!AppError::ApiError("bad query".to_string()).is_retryable());
        assert!(!AppError::SerializationError("eof".to_string()).is_retryable());
        assert!(!AppError::ValidationError("weights".to_string()).is_retryable());
    }

    #[test]
    fn test_config_errors_are_not_search_failures() {
        assert!(AppError::ApiError("x".to_string()).is_search_failure());
        assert!(!AppError::ConfigError("x".to_string()).is_search_failure());
        assert!(!AppError::ValidationError("x".to_string()).is_search_failure());
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let json = serde_json::to_value(AppError::Timeout("5s".to_string())).unwrap();
        assert_eq!(json["type"], "Timeout");
        assert_eq!(json["message"], "5s");
    }

    #[test]
    fn test_json_error_converts_to_serialization_error() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::SerializationError(_)));
    }
}
