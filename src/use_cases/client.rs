//! Client use-cases.

use std::sync::Arc;

use crate::models::{ActivatePayload, Client, GenericResponse};
use crate::repository::ClientDetailsRepository;
use crate::streaming::{ResourceStreamHandle, bridge_future};

pub struct GetClientDetailsUseCase {
    repository: Arc<dyn ClientDetailsRepository>,
}

impl GetClientDetailsUseCase {
    pub fn new(repository: Arc<dyn ClientDetailsRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(&self, client_id: i64) -> ResourceStreamHandle<Client> {
        let repository = self.repository.clone();
        bridge_future(
            async move { repository.get_client(client_id).await },
            "Failed to fetch client details",
        )
    }
}

pub struct ActivateClientUseCase {
    repository: Arc<dyn ClientDetailsRepository>,
}

impl ActivateClientUseCase {
    pub fn new(repository: Arc<dyn ClientDetailsRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(
        &self,
        client_id: i64,
        payload: ActivatePayload,
    ) -> ResourceStreamHandle<GenericResponse> {
        let repository = self.repository.clone();
        bridge_future(
            async move { repository.activate_client(client_id, payload).await },
            "Failed to activate client",
        )
    }
}

pub struct UploadClientImageUseCase {
    repository: Arc<dyn ClientDetailsRepository>,
}

impl UploadClientImageUseCase {
    pub fn new(repository: Arc<dyn ClientDetailsRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(
        &self,
        client_id: i64,
        file_name: String,
        bytes: Vec<u8>,
    ) -> ResourceStreamHandle<GenericResponse> {
        let repository = self.repository.clone();
        bridge_future(
            async move {
                repository
                    .upload_client_image(client_id, file_name, bytes)
                    .await
            },
            "Failed to upload image",
        )
    }
}

pub struct DeleteClientImageUseCase {
    repository: Arc<dyn ClientDetailsRepository>,
}

impl DeleteClientImageUseCase {
    pub fn new(repository: Arc<dyn ClientDetailsRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(&self, client_id: i64) -> ResourceStreamHandle<GenericResponse> {
        let repository = self.repository.clone();
        bridge_future(
            async move { repository.delete_client_image(client_id).await },
            "Failed to delete image",
        )
    }
}
