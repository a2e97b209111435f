//! Bridge behavior tests.
//!
//! Exercise the callback-source bridge with mock sources: event ordering,
//! terminal discipline, and exactly-once subscription release across every
//! exit path (terminal event, cancellation, drop).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures_util::StreamExt;

use fineract_client::error::FineractError;
use fineract_client::resource::Resource;
use fineract_client::streaming::{
    EventSink, ResourceStreamHandle, Subscription, bridge, bridge_with_message,
};

struct CountingSubscription {
    releases: Arc<AtomicUsize>,
}

impl Subscription for CountingSubscription {
    fn unsubscribe(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

fn counting_source<T, F>(
    releases: Arc<AtomicUsize>,
    feed: F,
) -> impl FnOnce(EventSink<T>) -> Result<Box<dyn Subscription>, FineractError> + Send + 'static
where
    T: Send + 'static,
    F: FnOnce(&EventSink<T>) + Send + 'static,
{
    move |sink| {
        feed(&sink);
        Ok(Box::new(CountingSubscription { releases }) as Box<dyn Subscription>)
    }
}

async fn collect<T>(handle: ResourceStreamHandle<T>) -> Vec<Resource<T>> {
    let mut stream = handle.stream;
    let mut events = Vec::new();
    while let Some(event) = stream.next().await {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn first_event_is_always_loading() {
    let releases = Arc::new(AtomicUsize::new(0));
    let handle = bridge(counting_source::<i32, _>(releases, |sink| {
        sink.next(1);
        sink.completed();
    }));

    let events = collect(handle).await;
    assert!(events[0].is_loading());
}

#[tokio::test]
async fn single_value_then_completed_yields_loading_then_success() {
    let releases = Arc::new(AtomicUsize::new(0));
    let handle = bridge(counting_source::<i32, _>(releases.clone(), |sink| {
        sink.next(42);
        sink.completed();
    }));

    let events = collect(handle).await;
    assert_eq!(events.len(), 2);
    assert!(events[0].is_loading());
    match &events[1] {
        Resource::Success(v) => assert_eq!(*v, 42),
        other => panic!("expected success, got {other:?}"),
    }
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn source_error_yields_loading_then_error() {
    let releases = Arc::new(AtomicUsize::new(0));
    let handle = bridge(counting_source::<i32, _>(releases.clone(), |sink| {
        sink.error(FineractError::api_error(500, "internal failure"));
    }));

    let events = collect(handle).await;
    assert_eq!(events.len(), 2);
    assert!(events[0].is_loading());
    match &events[1] {
        Resource::Error { message, cause } => {
            assert_eq!(message, "internal failure");
            assert!(matches!(cause, Some(FineractError::Api { code: 500, .. })));
        }
        other => panic!("expected error, got {other:?}"),
    }
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fixed_message_overrides_source_error_text() {
    let releases = Arc::new(AtomicUsize::new(0));
    let handle = bridge_with_message(
        counting_source::<i32, _>(releases, |sink| {
            sink.error(FineractError::api_error(500, "internal failure"));
        }),
        "Failed to delete image",
    );

    let events = collect(handle).await;
    match &events[1] {
        Resource::Error { message, .. } => assert_eq!(message, "Failed to delete image"),
        other => panic!("expected error, got {other:?}"),
    }
}

#[tokio::test]
async fn multi_value_source_emits_success_per_value() {
    let releases = Arc::new(AtomicUsize::new(0));
    let handle = bridge(counting_source::<i32, _>(releases, |sink| {
        sink.next(1);
        sink.next(2);
        sink.completed();
    }));

    let events = collect(handle).await;
    assert_eq!(events.len(), 3);
    assert!(events[0].is_loading());
    assert!(events[1].is_success());
    assert!(events[2].is_success());
}

#[tokio::test]
async fn subscribe_failure_surfaces_its_own_message() {
    let handle = bridge::<i32, _>(|_sink| Err(FineractError::Internal("boom".into())));

    let events = collect(handle).await;
    assert_eq!(events.len(), 2);
    assert!(events[0].is_loading());
    match &events[1] {
        Resource::Error { message, .. } => assert_eq!(message, "boom"),
        other => panic!("expected error, got {other:?}"),
    }
}

#[tokio::test]
async fn completed_without_value_ends_after_loading() {
    // Known edge case: a source that completes silently produces no terminal
    // resource. The consumer sees Loading and then the end of the stream.
    let releases = Arc::new(AtomicUsize::new(0));
    let handle = bridge(counting_source::<i32, _>(releases.clone(), |sink| {
        sink.completed();
    }));

    let events = collect(handle).await;
    assert_eq!(events.len(), 1);
    assert!(events[0].is_loading());
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn early_detach_releases_subscription_exactly_once() {
    let releases = Arc::new(AtomicUsize::new(0));
    // Source that never terminates.
    let handle = bridge(counting_source::<i32, _>(releases.clone(), |_sink| {}));

    let ResourceStreamHandle { mut stream, cancel } = handle;
    assert!(stream.next().await.expect("loading").is_loading());

    // Let the bridge establish its subscription, then detach.
    let _ = tokio::time::timeout(Duration::from_millis(50), stream.next()).await;
    cancel.cancel();

    assert!(stream.next().await.is_none());
    assert_eq!(releases.load(Ordering::SeqCst), 1);

    // Double cancel must not release again and must not panic.
    cancel.cancel();
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cancel_after_natural_termination_is_a_no_op() {
    let releases = Arc::new(AtomicUsize::new(0));
    let handle = bridge(counting_source::<i32, _>(releases.clone(), |sink| {
        sink.next(7);
        sink.completed();
    }));

    let cancel = handle.cancel.clone();
    let events = collect(handle).await;
    assert_eq!(events.len(), 2);
    assert_eq!(releases.load(Ordering::SeqCst), 1);

    cancel.cancel();
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn dropping_the_stream_releases_the_subscription() {
    let releases = Arc::new(AtomicUsize::new(0));
    let handle = bridge(counting_source::<i32, _>(releases.clone(), |_sink| {}));

    let mut stream = handle.stream;
    assert!(stream.next().await.expect("loading").is_loading());
    // Poll once more so the subscription exists, then drop mid-flight.
    let _ = tokio::time::timeout(Duration::from_millis(50), stream.next()).await;
    drop(stream);

    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cancel_wins_over_queued_source_event() {
    // A value emitted during subscribe sits in the channel by the time the
    // consumer cancels; the next poll must observe the cancellation, not the
    // queued Success. Looped because the ordering is poll-dependent.
    for _ in 0..200 {
        let releases = Arc::new(AtomicUsize::new(0));
        let handle = bridge(counting_source::<i32, _>(releases.clone(), |sink| {
            sink.next(7);
        }));

        let ResourceStreamHandle { mut stream, cancel } = handle;
        assert!(stream.next().await.expect("loading").is_loading());

        cancel.cancel();
        if let Some(event) = stream.next().await {
            panic!("event delivered after cancel: {event:?}");
        }
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }
}

#[tokio::test]
async fn no_events_after_cancel() {
    let releases = Arc::new(AtomicUsize::new(0));
    let releases_for_source = releases.clone();
    // Source keeps a sink clone around and emits after the consumer cancels.
    let (sink_tx, sink_rx) = std::sync::mpsc::channel::<EventSink<i32>>();
    let handle = bridge(move |sink: EventSink<i32>| {
        let _ = sink_tx.send(sink.clone());
        Ok(Box::new(CountingSubscription {
            releases: releases_for_source,
        }) as Box<dyn Subscription>)
    });

    let ResourceStreamHandle { mut stream, cancel } = handle;
    assert!(stream.next().await.expect("loading").is_loading());
    let _ = tokio::time::timeout(Duration::from_millis(50), stream.next()).await;

    let sink = sink_rx.recv().expect("sink captured");
    cancel.cancel();
    assert!(stream.next().await.is_none());

    // Late emissions go nowhere; the stream stays closed.
    sink.next(99);
    assert!(stream.next().await.is_none());
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}
