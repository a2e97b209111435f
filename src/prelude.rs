//! Convenience re-exports for common usage.

pub use crate::client::{FineractClient, FineractClientBuilder};
pub use crate::config::{FineractConfig, HttpConfig};
pub use crate::error::{ErrorCategory, FineractError};
pub use crate::models::*;
pub use crate::resource::Resource;
pub use crate::streaming::{
    EventSink, ResourceStream, ResourceStreamHandle, Subscription, bridge, bridge_future,
    bridge_with_message,
};
pub use crate::utils::cancel::CancelHandle;
