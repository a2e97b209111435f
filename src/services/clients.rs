//! Client resource endpoints.
//!
//! REST endpoints under `/clients`, plus the pinpoint-location datatable.

use crate::endpoints;
use crate::error::FineractError;
use crate::http::{HttpExecutor, file_part};
use crate::models::{
    ActivatePayload, Client, ClientAccounts, ClientAddressRequest, ClientAddressResponse,
    ClientPayload, ClientsTemplate, GenericResponse, Identifier, IdentifierCreationResponse,
    IdentifierPayload, IdentifierTemplate, Page,
};

#[derive(Clone)]
pub struct ClientsService {
    http: HttpExecutor,
}

impl ClientsService {
    pub(crate) fn new(http: HttpExecutor) -> Self {
        Self { http }
    }

    /// Fetch one page of clients.
    ///
    /// `offset` is the position to fetch from, `limit` the maximum page size.
    pub async fn get_all_clients(
        &self,
        paged: bool,
        offset: i64,
        limit: i64,
    ) -> Result<Page<Client>, FineractError> {
        self.http
            .get_json(
                endpoints::CLIENTS,
                &[
                    ("paged", paged.to_string()),
                    ("offset", offset.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await
    }

    pub async fn get_client(&self, client_id: i64) -> Result<Client, FineractError> {
        self.http.get_json(&endpoints::client(client_id), &[]).await
    }

    /// Loan and savings accounts held by a client.
    pub async fn get_client_accounts(
        &self,
        client_id: i64,
    ) -> Result<ClientAccounts, FineractError> {
        self.http
            .get_json(&endpoints::client_accounts(client_id), &[])
            .await
    }

    /// Office and staff options for the client creation form.
    pub async fn get_client_template(&self) -> Result<ClientsTemplate, FineractError> {
        self.http
            .get_json(&endpoints::client_template(), &[])
            .await
    }

    pub async fn create_client(&self, payload: &ClientPayload) -> Result<Client, FineractError> {
        self.http.post_json(endpoints::CLIENTS, payload).await
    }

    pub async fn activate_client(
        &self,
        client_id: i64,
        payload: &ActivatePayload,
    ) -> Result<GenericResponse, FineractError> {
        self.http
            .post_command(&endpoints::client(client_id), "activate", payload)
            .await
    }

    /// Upload a client image as a multipart POST.
    pub async fn upload_client_image(
        &self,
        client_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<GenericResponse, FineractError> {
        let part = file_part(file_name, bytes)?;
        let form = reqwest::multipart::Form::new().part("file", part);
        self.http
            .post_multipart(&endpoints::client_images(client_id), form)
            .await
    }

    pub async fn delete_client_image(
        &self,
        client_id: i64,
    ) -> Result<GenericResponse, FineractError> {
        self.http
            .delete_json(&endpoints::client_images(client_id))
            .await
    }

    pub async fn get_client_identifiers(
        &self,
        client_id: i64,
    ) -> Result<Vec<Identifier>, FineractError> {
        self.http
            .get_json(&endpoints::client_identifiers(client_id), &[])
            .await
    }

    pub async fn create_client_identifier(
        &self,
        client_id: i64,
        payload: &IdentifierPayload,
    ) -> Result<IdentifierCreationResponse, FineractError> {
        self.http
            .post_json(&endpoints::client_identifiers(client_id), payload)
            .await
    }

    pub async fn get_client_identifier_template(
        &self,
        client_id: i64,
    ) -> Result<IdentifierTemplate, FineractError> {
        self.http
            .get_json(&endpoints::client_identifier_template(client_id), &[])
            .await
    }

    pub async fn delete_client_identifier(
        &self,
        client_id: i64,
        identifier_id: i64,
    ) -> Result<GenericResponse, FineractError> {
        self.http
            .delete_json(&endpoints::client_identifier(client_id, identifier_id))
            .await
    }

    /// Pinpoint locations live in the `client_pinpoint_location` datatable,
    /// not under `/clients`.
    pub async fn get_client_pinpoint_locations(
        &self,
        client_id: i64,
    ) -> Result<Vec<ClientAddressResponse>, FineractError> {
        self.http
            .get_json(&endpoints::pinpoint_locations(client_id), &[])
            .await
    }

    pub async fn add_client_pinpoint_location(
        &self,
        client_id: i64,
        address: &ClientAddressRequest,
    ) -> Result<GenericResponse, FineractError> {
        self.http
            .post_json(&endpoints::pinpoint_locations(client_id), address)
            .await
    }

    pub async fn update_client_pinpoint_location(
        &self,
        apptable_id: i64,
        datatable_id: i64,
        address: &ClientAddressRequest,
    ) -> Result<GenericResponse, FineractError> {
        self.http
            .put_json(&endpoints::pinpoint_location(apptable_id, datatable_id), address)
            .await
    }

    pub async fn delete_client_pinpoint_location(
        &self,
        apptable_id: i64,
        datatable_id: i64,
    ) -> Result<GenericResponse, FineractError> {
        self.http
            .delete_json(&endpoints::pinpoint_location(apptable_id, datatable_id))
            .await
    }
}
