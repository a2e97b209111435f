//! Core Resource Stream Types

use futures::Stream;
use std::pin::Pin;

use crate::resource::Resource;
use crate::utils::cancel::CancelHandle;

/// Resource stream - the consumer-facing interface of every bridged
/// operation.
///
/// A pinned, boxed stream yielding [`Resource`] items: `Loading` first, then
/// at most one terminal `Success` or `Error`. Failures never escape the
/// stream as panics or `Err` items; they are carried as data.
pub type ResourceStream<T> = Pin<Box<dyn Stream<Item = Resource<T>> + Send>>;

/// Resource stream with a first-class cancellation handle.
///
/// Cancelling detaches the consumer and releases the underlying subscription;
/// the stream yields nothing further.
///
/// # Example
/// ```rust,no_run
/// # use fineract_client::streaming::ResourceStreamHandle;
/// # use futures_util::StreamExt;
/// # async fn example(mut handle: ResourceStreamHandle<()>) {
/// while let Some(state) = handle.stream.next().await {
///     // render Loading / Success / Error
/// }
/// // or stop early:
/// handle.cancel.cancel();
/// # }
/// ```
pub struct ResourceStreamHandle<T> {
    /// The underlying resource stream
    pub stream: ResourceStream<T>,
    /// Handle to cancel the stream
    pub cancel: CancelHandle,
}
