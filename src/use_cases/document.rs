//! Document use-cases.

use std::sync::Arc;

use crate::models::{Document, GenericResponse};
use crate::repository::DocumentListRepository;
use crate::streaming::{ResourceStreamHandle, bridge_future};

pub struct GetDocumentsListUseCase {
    repository: Arc<dyn DocumentListRepository>,
}

impl GetDocumentsListUseCase {
    pub fn new(repository: Arc<dyn DocumentListRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(
        &self,
        entity_type: String,
        entity_id: i64,
    ) -> ResourceStreamHandle<Vec<Document>> {
        let repository = self.repository.clone();
        bridge_future(
            async move { repository.get_documents_list(entity_type, entity_id).await },
            "Failed to load documents",
        )
    }
}

pub struct DownloadDocumentUseCase {
    repository: Arc<dyn DocumentListRepository>,
}

impl DownloadDocumentUseCase {
    pub fn new(repository: Arc<dyn DocumentListRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(
        &self,
        entity_type: String,
        entity_id: i64,
        document_id: i64,
    ) -> ResourceStreamHandle<Vec<u8>> {
        let repository = self.repository.clone();
        bridge_future(
            async move {
                repository
                    .download_document(entity_type, entity_id, document_id)
                    .await
            },
            "Failed to download document",
        )
    }
}

pub struct RemoveDocumentUseCase {
    repository: Arc<dyn DocumentListRepository>,
}

impl RemoveDocumentUseCase {
    pub fn new(repository: Arc<dyn DocumentListRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(
        &self,
        entity_type: String,
        entity_id: i64,
        document_id: i64,
    ) -> ResourceStreamHandle<GenericResponse> {
        let repository = self.repository.clone();
        bridge_future(
            async move {
                repository
                    .remove_document(entity_type, entity_id, document_id)
                    .await
            },
            "Failed to remove document",
        )
    }
}
