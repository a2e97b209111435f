//! Document list repository.

use async_trait::async_trait;

use crate::client::FineractClient;
use crate::error::FineractError;
use crate::models::{Document, GenericResponse};

#[async_trait]
pub trait DocumentListRepository: Send + Sync {
    async fn get_documents_list(
        &self,
        entity_type: String,
        entity_id: i64,
    ) -> Result<Vec<Document>, FineractError>;

    async fn download_document(
        &self,
        entity_type: String,
        entity_id: i64,
        document_id: i64,
    ) -> Result<Vec<u8>, FineractError>;

    async fn remove_document(
        &self,
        entity_type: String,
        entity_id: i64,
        document_id: i64,
    ) -> Result<GenericResponse, FineractError>;
}

pub struct DocumentListRepositoryImpl {
    client: FineractClient,
}

impl DocumentListRepositoryImpl {
    pub fn new(client: FineractClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentListRepository for DocumentListRepositoryImpl {
    async fn get_documents_list(
        &self,
        entity_type: String,
        entity_id: i64,
    ) -> Result<Vec<Document>, FineractError> {
        self.client
            .documents()
            .get_documents(&entity_type, entity_id)
            .await
    }

    async fn download_document(
        &self,
        entity_type: String,
        entity_id: i64,
        document_id: i64,
    ) -> Result<Vec<u8>, FineractError> {
        self.client
            .documents()
            .download_document(&entity_type, entity_id, document_id)
            .await
    }

    async fn remove_document(
        &self,
        entity_type: String,
        entity_id: i64,
        document_id: i64,
    ) -> Result<GenericResponse, FineractError> {
        self.client
            .documents()
            .remove_document(&entity_type, entity_id, document_id)
            .await
    }
}
