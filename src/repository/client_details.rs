//! Client details repository.

use async_trait::async_trait;

use crate::client::FineractClient;
use crate::error::FineractError;
use crate::models::{ActivatePayload, Client, ClientPayload, GenericResponse};

#[async_trait]
pub trait ClientDetailsRepository: Send + Sync {
    async fn get_client(&self, client_id: i64) -> Result<Client, FineractError>;

    async fn create_client(&self, payload: ClientPayload) -> Result<Client, FineractError>;

    async fn activate_client(
        &self,
        client_id: i64,
        payload: ActivatePayload,
    ) -> Result<GenericResponse, FineractError>;

    async fn upload_client_image(
        &self,
        client_id: i64,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<GenericResponse, FineractError>;

    async fn delete_client_image(&self, client_id: i64) -> Result<GenericResponse, FineractError>;
}

/// Network-backed implementation.
pub struct ClientDetailsRepositoryImpl {
    client: FineractClient,
}

impl ClientDetailsRepositoryImpl {
    pub fn new(client: FineractClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClientDetailsRepository for ClientDetailsRepositoryImpl {
    async fn get_client(&self, client_id: i64) -> Result<Client, FineractError> {
        self.client.clients().get_client(client_id).await
    }

    async fn create_client(&self, payload: ClientPayload) -> Result<Client, FineractError> {
        self.client.clients().create_client(&payload).await
    }

    async fn activate_client(
        &self,
        client_id: i64,
        payload: ActivatePayload,
    ) -> Result<GenericResponse, FineractError> {
        self.client
            .clients()
            .activate_client(client_id, &payload)
            .await
    }

    async fn upload_client_image(
        &self,
        client_id: i64,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<GenericResponse, FineractError> {
        self.client
            .clients()
            .upload_client_image(client_id, &file_name, bytes)
            .await
    }

    async fn delete_client_image(&self, client_id: i64) -> Result<GenericResponse, FineractError> {
        self.client.clients().delete_client_image(client_id).await
    }
}
