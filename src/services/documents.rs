//! Document endpoints.
//!
//! Documents hang off an arbitrary parent entity: the path is
//! `/{entityType}/{entityId}/documents`.

use crate::endpoints;
use crate::error::FineractError;
use crate::http::{HttpExecutor, file_part};
use crate::models::{Document, GenericResponse};

#[derive(Clone)]
pub struct DocumentsService {
    http: HttpExecutor,
}

impl DocumentsService {
    pub(crate) fn new(http: HttpExecutor) -> Self {
        Self { http }
    }

    pub async fn get_documents(
        &self,
        entity_type: &str,
        entity_id: i64,
    ) -> Result<Vec<Document>, FineractError> {
        self.http
            .get_json(&endpoints::documents(entity_type, entity_id), &[])
            .await
    }

    /// Download the raw attachment bytes.
    pub async fn download_document(
        &self,
        entity_type: &str,
        entity_id: i64,
        document_id: i64,
    ) -> Result<Vec<u8>, FineractError> {
        self.http
            .get_bytes(&endpoints::document_attachment(entity_type, entity_id, document_id))
            .await
    }

    pub async fn create_document(
        &self,
        entity_type: &str,
        entity_id: i64,
        name: &str,
        description: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<GenericResponse, FineractError> {
        let part = file_part(file_name, bytes)?;
        let form = reqwest::multipart::Form::new()
            .text("name", name.to_string())
            .text("description", description.to_string())
            .part("file", part);
        self.http
            .post_multipart(&endpoints::documents(entity_type, entity_id), form)
            .await
    }

    pub async fn remove_document(
        &self,
        entity_type: &str,
        entity_id: i64,
        document_id: i64,
    ) -> Result<GenericResponse, FineractError> {
        self.http
            .delete_json(&endpoints::document(entity_type, entity_id, document_id))
            .await
    }
}
