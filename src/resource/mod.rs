//! Resource Wrapper
//!
//! [`Resource`] is the tagged union every bridged operation yields to its
//! consumer: `Loading` first, then `Success` or `Error`. It is pure data; the
//! sequencing discipline lives in [`crate::streaming`].

use crate::error::FineractError;

/// Outcome state of an asynchronous operation.
///
/// Consumers are expected to match exhaustively: render `Loading` as a
/// progress indicator, `Success` as the result view and `Error` as a message
/// banner.
#[derive(Debug, Clone)]
pub enum Resource<T> {
    /// Operation started, no outcome yet
    Loading,
    /// Operation produced a value
    Success(T),
    /// Operation failed
    Error {
        /// Message suitable for display
        message: String,
        /// The normalized failure, when one is available
        cause: Option<FineractError>,
    },
}

impl<T> Resource<T> {
    /// Build an error resource from a message alone.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            cause: None,
        }
    }

    /// Build an error resource carrying its cause.
    pub fn from_failure(message: impl Into<String>, cause: FineractError) -> Self {
        Self::Error {
            message: message.into(),
            cause: Some(cause),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Map the success payload, leaving the other variants untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Self::Loading => Resource::Loading,
            Self::Success(value) => Resource::Success(f(value)),
            Self::Error { message, cause } => Resource::Error { message, cause },
        }
    }

    /// Success payload, if this is a success.
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }
}
