//! Use-case tests over mock repositories.
//!
//! The use-case layer must surface repository outcomes as the
//! `[Loading, Success | Error]` discipline, with each operation's fixed
//! failure message, and must stop promptly when the consumer detaches.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;

use fineract_client::error::FineractError;
use fineract_client::models::{ActivatePayload, Client, ClientPayload, GenericResponse};
use fineract_client::repository::ClientDetailsRepository;
use fineract_client::resource::Resource;
use fineract_client::use_cases::{DeleteClientImageUseCase, GetClientDetailsUseCase};

enum Behavior {
    Succeed,
    Fail,
    Hang,
}

struct FakeClientDetailsRepository {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl FakeClientDetailsRepository {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    async fn respond(&self) -> Result<GenericResponse, FineractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::Succeed => {
                let mut fields = serde_json::Map::new();
                fields.insert("resourceId".to_string(), serde_json::json!(5));
                Ok(GenericResponse {
                    response_fields: fields,
                })
            }
            Behavior::Fail => Err(FineractError::api_error(500, "platform exploded")),
            Behavior::Hang => {
                futures_util::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}

#[async_trait]
impl ClientDetailsRepository for FakeClientDetailsRepository {
    async fn get_client(&self, client_id: i64) -> Result<Client, FineractError> {
        self.respond().await?;
        Ok(Client {
            id: Some(client_id),
            display_name: Some("Jane Doe".to_string()),
            ..Client::default()
        })
    }

    async fn create_client(&self, _payload: ClientPayload) -> Result<Client, FineractError> {
        unimplemented!("not used in these tests")
    }

    async fn activate_client(
        &self,
        _client_id: i64,
        _payload: ActivatePayload,
    ) -> Result<GenericResponse, FineractError> {
        unimplemented!("not used in these tests")
    }

    async fn upload_client_image(
        &self,
        _client_id: i64,
        _file_name: String,
        _bytes: Vec<u8>,
    ) -> Result<GenericResponse, FineractError> {
        unimplemented!("not used in these tests")
    }

    async fn delete_client_image(&self, _client_id: i64) -> Result<GenericResponse, FineractError> {
        self.respond().await
    }
}

#[tokio::test]
async fn delete_image_success_emits_loading_then_success() {
    let repository = FakeClientDetailsRepository::new(Behavior::Succeed);
    let use_case = DeleteClientImageUseCase::new(repository.clone());

    let mut stream = use_case.invoke(5).stream;
    assert!(stream.next().await.expect("loading").is_loading());
    match stream.next().await.expect("terminal") {
        Resource::Success(response) => assert_eq!(response.resource_id(), Some(5)),
        other => panic!("expected success, got {other:?}"),
    }
    assert!(stream.next().await.is_none());
    assert_eq!(repository.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn delete_image_failure_uses_fixed_message() {
    let repository = FakeClientDetailsRepository::new(Behavior::Fail);
    let use_case = DeleteClientImageUseCase::new(repository);

    let mut stream = use_case.invoke(5).stream;
    assert!(stream.next().await.expect("loading").is_loading());
    match stream.next().await.expect("terminal") {
        Resource::Error { message, cause } => {
            assert_eq!(message, "Failed to delete image");
            assert!(matches!(cause, Some(FineractError::Api { code: 500, .. })));
        }
        other => panic!("expected error, got {other:?}"),
    }
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn get_client_details_success() {
    let repository = FakeClientDetailsRepository::new(Behavior::Succeed);
    let use_case = GetClientDetailsUseCase::new(repository);

    let mut stream = use_case.invoke(12).stream;
    assert!(stream.next().await.expect("loading").is_loading());
    match stream.next().await.expect("terminal") {
        Resource::Success(client) => {
            assert_eq!(client.id, Some(12));
            assert_eq!(client.display_name.as_deref(), Some("Jane Doe"));
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn detaching_consumer_stops_a_hanging_operation() {
    let repository = FakeClientDetailsRepository::new(Behavior::Hang);
    let use_case = DeleteClientImageUseCase::new(repository.clone());

    let handle = use_case.invoke(5);
    let mut stream = handle.stream;
    let cancel = handle.cancel;

    assert!(stream.next().await.expect("loading").is_loading());
    // The repository call is in flight and will never finish on its own.
    let pending = tokio::time::timeout(Duration::from_millis(50), stream.next()).await;
    assert!(pending.is_err(), "operation should still be pending");
    assert_eq!(repository.calls.load(Ordering::SeqCst), 1);

    cancel.cancel();
    assert!(stream.next().await.is_none());
}
