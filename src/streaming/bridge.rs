//! Callback-source bridge.
//!
//! Converts a push-style source (a subscription factory notified through
//! `next`/`error`/`completed` callbacks) into a [`ResourceStream`] that emits
//! `Loading` first and then at most one terminal `Success`/`Error`, releasing
//! the underlying subscription exactly once on every exit path.

use std::future::Future;

use tokio::sync::mpsc;

use crate::error::FineractError;
use crate::resource::Resource;
use crate::streaming::{ResourceStream, ResourceStreamHandle};
use crate::utils::cancel::CancelHandle;

/// A cancellable handle to an in-flight asynchronous operation.
///
/// The bridge guarantees `unsubscribe` is called at most once, regardless of
/// how the stream ends. Implementations do not need their own double-release
/// protection.
pub trait Subscription: Send {
    /// Cancel the underlying work.
    fn unsubscribe(&mut self);
}

enum SourceEvent<T> {
    Next(T),
    Error(FineractError),
    Completed,
}

/// The listener handed to a subscription factory.
///
/// Sending into a sink whose consumer has already detached is a silent no-op,
/// mirroring a closed channel.
pub struct EventSink<T> {
    tx: mpsc::UnboundedSender<SourceEvent<T>>,
}

impl<T> EventSink<T> {
    /// Deliver a data event. Does not terminate the sequence.
    pub fn next(&self, value: T) {
        let _ = self.tx.send(SourceEvent::Next(value));
    }

    /// Deliver the terminal failure event.
    pub fn error(&self, error: FineractError) {
        let _ = self.tx.send(SourceEvent::Error(error));
    }

    /// Deliver the terminal completion event.
    pub fn completed(&self) {
        let _ = self.tx.send(SourceEvent::Completed);
    }
}

impl<T> Clone for EventSink<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Releases the wrapped subscription exactly once.
///
/// Funnelling every exit path (terminal event, cancellation, stream drop)
/// through `Option::take` is what makes double-cancel a no-op.
struct ReleaseGuard {
    subscription: Option<Box<dyn Subscription>>,
}

impl ReleaseGuard {
    fn release(&mut self) {
        if let Some(mut sub) = self.subscription.take() {
            sub.unsubscribe();
        }
    }
}

impl Drop for ReleaseGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Bridge a push-style source into a resource stream.
///
/// The `subscribe` factory receives an [`EventSink`] and returns the
/// [`Subscription`] handle for the work it started. Failure messages come
/// from the source errors themselves; see [`bridge_with_message`] for
/// operations with a fixed user-facing message.
pub fn bridge<T, F>(subscribe: F) -> ResourceStreamHandle<T>
where
    T: Send + 'static,
    F: FnOnce(EventSink<T>) -> Result<Box<dyn Subscription>, FineractError> + Send + 'static,
{
    bridge_inner(subscribe, None)
}

/// Bridge a push-style source, reporting source failures with a fixed
/// message (e.g. `"Failed to delete image"`). The original error is kept as
/// the resource's cause. Errors raised while establishing the subscription
/// still surface with their own message.
pub fn bridge_with_message<T, F>(subscribe: F, failure_message: &str) -> ResourceStreamHandle<T>
where
    T: Send + 'static,
    F: FnOnce(EventSink<T>) -> Result<Box<dyn Subscription>, FineractError> + Send + 'static,
{
    bridge_inner(subscribe, Some(failure_message.to_string()))
}

fn bridge_inner<T, F>(subscribe: F, failure_message: Option<String>) -> ResourceStreamHandle<T>
where
    T: Send + 'static,
    F: FnOnce(EventSink<T>) -> Result<Box<dyn Subscription>, FineractError> + Send + 'static,
{
    let cancel = CancelHandle::new();
    let token = cancel.token();

    let stream = async_stream::stream! {
        yield Resource::Loading;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut guard = ReleaseGuard { subscription: None };

        match subscribe(EventSink { tx }) {
            Ok(sub) => guard.subscription = Some(sub),
            Err(e) => {
                // Setup failures surface with their own message, never the
                // fixed operation message.
                tracing::debug!(error = %e, "bridge subscription setup failed");
                yield Resource::from_failure(e.message(), e);
                return;
            }
        }

        loop {
            // Cancellation must win over queued source events, otherwise a
            // consumer could observe a Success after detaching.
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                event = rx.recv() => match event {
                    Some(SourceEvent::Next(value)) => yield Resource::Success(value),
                    Some(SourceEvent::Error(e)) => {
                        let message = failure_message.clone().unwrap_or_else(|| e.message());
                        yield Resource::from_failure(message, e);
                        break;
                    }
                    // Completed-without-value ends the sequence silently;
                    // the consumer has already seen Loading.
                    Some(SourceEvent::Completed) | None => break,
                },
            }
        }

        guard.release();
    };

    let stream: ResourceStream<T> = Box::pin(stream);
    ResourceStreamHandle { stream, cancel }
}

struct TaskSubscription {
    handle: tokio::task::JoinHandle<()>,
}

impl Subscription for TaskSubscription {
    fn unsubscribe(&mut self) {
        self.handle.abort();
    }
}

/// Bridge a one-shot async call into the `[Loading, Success | Error]`
/// discipline.
///
/// The future runs on a spawned task so the consumer can detach at any time;
/// detachment aborts the task, which drops the in-flight request. This is the
/// entry point the use-case layer builds on.
pub fn bridge_future<T, F>(future: F, failure_message: &str) -> ResourceStreamHandle<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T, FineractError>> + Send + 'static,
{
    bridge_with_message(
        move |sink: EventSink<T>| {
            let handle = tokio::spawn(async move {
                match future.await {
                    Ok(value) => {
                        sink.next(value);
                        sink.completed();
                    }
                    Err(e) => sink.error(e),
                }
            });
            Ok(Box::new(TaskSubscription { handle }) as Box<dyn Subscription>)
        },
        failure_message,
    )
}
