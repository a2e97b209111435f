//! Error Handling Module
//!
//! All failure paths in this crate are normalized into [`FineractError`]:
//! transport faults, non-2xx API responses (including the Fineract error
//! envelope), serialization problems, and setup mistakes. Consumer-initiated
//! cancellation is never represented as an error; cancelled streams simply
//! end.
//!
//! # Example
//!
//! ```rust,ignore
//! use fineract_client::error::{ErrorCategory, FineractError};
//!
//! let error = FineractError::api_error(404, "Client not found");
//! assert_eq!(error.category(), ErrorCategory::Client);
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Main error type for the Fineract client.
#[derive(Error, Debug, Clone)]
pub enum FineractError {
    /// HTTP transport errors (connection, TLS, request build failures)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-2xx responses from the Fineract API
    #[error("API error {code}: {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Human-readable message, preferring the platform's
        /// `defaultUserMessage` when present
        message: String,
        /// Raw error envelope returned by the platform, if it was JSON
        details: Option<serde_json::Value>,
    },

    /// Authentication or tenant resolution failures
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// JSON encode/decode errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid caller-supplied parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Request exceeded its deadline
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Internal invariant violations
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse error classification for retry decisions and UI rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Network/transport level
    Transport,
    /// Authentication or authorization
    Auth,
    /// Caller-side problem (4xx, bad parameters)
    Client,
    /// Platform-side problem (5xx)
    Server,
    /// Encoding/decoding
    Serialization,
    /// Everything else
    Other,
}

impl FineractError {
    /// Construct an API error with no envelope details.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Http(_) | Self::Timeout(_) => ErrorCategory::Transport,
            Self::Authentication(_) => ErrorCategory::Auth,
            Self::Api { code, .. } => match code {
                401 | 403 => ErrorCategory::Auth,
                400..=499 => ErrorCategory::Client,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Other,
            },
            Self::Json(_) => ErrorCategory::Serialization,
            Self::InvalidParameter(_) => ErrorCategory::Client,
            Self::Internal(_) => ErrorCategory::Other,
        }
    }

    /// Whether a retry with the same request could reasonably succeed.
    ///
    /// Transport faults, timeouts, 408/429 and 5xx are retryable; everything
    /// else is not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout(_) => true,
            Self::Api { code, .. } => matches!(code, 408 | 429) || (500..=599).contains(code),
            _ => false,
        }
    }

    /// The bare message carried by this error, without the variant prefix.
    ///
    /// This is what the stream bridge reports when no fixed failure message
    /// was configured for an operation.
    pub fn message(&self) -> String {
        match self {
            Self::Http(m)
            | Self::Authentication(m)
            | Self::Json(m)
            | Self::InvalidParameter(m)
            | Self::Timeout(m)
            | Self::Internal(m) => m.clone(),
            Self::Api { message, .. } => message.clone(),
        }
    }

    /// Short message suitable for direct display in a UI banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http(_) | Self::Timeout(_) => "Could not reach the server".to_string(),
            Self::Authentication(_) => "Authentication failed".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for FineractError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FineractError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_categories() {
        assert_eq!(
            FineractError::api_error(404, "nope").category(),
            ErrorCategory::Client
        );
        assert_eq!(
            FineractError::api_error(503, "down").category(),
            ErrorCategory::Server
        );
        assert_eq!(
            FineractError::api_error(401, "who").category(),
            ErrorCategory::Auth
        );
    }

    #[test]
    fn retryability() {
        assert!(FineractError::Http("reset".into()).is_retryable());
        assert!(FineractError::api_error(429, "slow down").is_retryable());
        assert!(FineractError::api_error(500, "boom").is_retryable());
        assert!(!FineractError::api_error(404, "missing").is_retryable());
        assert!(!FineractError::Json("bad".into()).is_retryable());
    }
}
