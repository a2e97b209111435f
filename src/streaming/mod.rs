//! Streaming Module
//!
//! Adapts push-style asynchronous sources into a single consumable sequence
//! of [`Resource`](crate::resource::Resource) values:
//! - Resource stream types and the cancellation-aware handle
//! - The callback-source bridge with exactly-once subscription release
//! - A one-shot future adapter used by the use-case layer

mod bridge;
mod types;

pub use bridge::*;
pub use types::*;
