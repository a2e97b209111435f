//! Cancellation utilities
//!
//! First-class cancellation handles for bridged operations.

use tokio_util::sync::CancellationToken;

/// A handle that can be used to request cancellation of a bridged operation.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    pub(crate) fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    pub(crate) fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Request cancellation. The bridged stream observing this handle stops
    /// as soon as possible and releases its underlying subscription.
    /// Cancelling more than once is a no-op.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check if cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// A future that resolves when cancellation is requested.
    pub fn cancelled(&self) -> tokio_util::sync::WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}
