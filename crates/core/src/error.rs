//! Error types for the Jotter domain.
//!
//! The journal itself cannot fail. Tool failures are reported back to the
//! model as text, so only provider failures end an assistant turn.

use thiserror::Error;

/// The top-level error type for all Jotter operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = Error::Provider(ProviderError::ApiError {
            status_code: 500,
            message: "backend unavailable".into(),
        });
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("backend unavailable"));
    }

    #[test]
    fn provider_error_converts_with_question_mark() {
        fn call() -> Result<()> {
            let outcome: std::result::Result<(), ProviderError> =
                Err(ProviderError::RateLimited { retry_after_secs: 30 });
            outcome?;
            Ok(())
        }
        assert!(matches!(
            call(),
            Err(Error::Provider(ProviderError::RateLimited { retry_after_secs: 30 }))
        ));
    }

    #[test]
    fn invalid_arguments_message_carries_reason() {
        let err = ToolError::InvalidArguments("Select at least one category".into());
        assert_eq!(err.to_string(), "Invalid tool arguments: Select at least one category");
    }
}
