//! HTTP request helpers (non-stream)
//!
//! One helper per verb over a shared [`HttpExecutor`]: tenant and auth
//! headers from config, a per-request id for tracing, unified non-2xx
//! classification through the Fineract error envelope, then JSON decoding.

mod errors;

pub use errors::classify_http_error;

use reqwest::RequestBuilder;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::FineractConfig;
use crate::defaults;
use crate::error::FineractError;

/// Shared request plumbing behind every service.
#[derive(Clone, Debug)]
pub(crate) struct HttpExecutor {
    client: reqwest::Client,
    config: Arc<FineractConfig>,
}

impl HttpExecutor {
    pub(crate) fn new(client: reqwest::Client, config: Arc<FineractConfig>) -> Self {
        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn prepare(&self, rb: RequestBuilder) -> RequestBuilder {
        let mut rb = rb
            .header(defaults::platform::TENANT_HEADER, &self.config.tenant_id)
            .header(reqwest::header::ACCEPT, "application/json");
        for (key, value) in &self.config.http.headers {
            rb = rb.header(key, value);
        }
        if let Some(creds) = &self.config.credentials {
            rb = rb.basic_auth(&creds.username, Some(creds.password.expose_secret()));
        }
        rb
    }

    async fn dispatch(&self, rb: RequestBuilder, path: &str) -> Result<reqwest::Response, FineractError> {
        let request_id = uuid::Uuid::new_v4();
        tracing::debug!(%request_id, path, "sending request");

        let response = self.prepare(rb).send().await.map_err(FineractError::from)?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            let error =
                classify_http_error(status.as_u16(), &body, &headers, status.canonical_reason());
            tracing::warn!(%request_id, path, status = status.as_u16(), error = %error, "request failed");
            return Err(error);
        }

        tracing::debug!(%request_id, path, status = status.as_u16(), "request succeeded");
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FineractError> {
        let text = response.text().await.map_err(FineractError::from)?;
        serde_json::from_str(&text).map_err(|e| {
            FineractError::Json(format!("failed to decode response body: {e}"))
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FineractError> {
        let rb = self.client.get(self.url(path)).query(query);
        Self::decode(self.dispatch(rb, path).await?).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, FineractError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let rb = self.client.post(self.url(path)).json(body);
        Self::decode(self.dispatch(rb, path).await?).await
    }

    /// POST with a `command` query parameter, the platform's idiom for state
    /// transitions (`?command=activate`, `?command=approve`).
    pub(crate) async fn post_command<B, T>(
        &self,
        path: &str,
        command: &str,
        body: &B,
    ) -> Result<T, FineractError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let rb = self
            .client
            .post(self.url(path))
            .query(&[("command", command)])
            .json(body);
        Self::decode(self.dispatch(rb, path).await?).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, FineractError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let rb = self.client.put(self.url(path)).json(body);
        Self::decode(self.dispatch(rb, path).await?).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, FineractError> {
        let rb = self.client.delete(self.url(path));
        Self::decode(self.dispatch(rb, path).await?).await
    }

    /// Raw binary download (document attachments, client images).
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, FineractError> {
        let rb = self.client.get(self.url(path));
        let response = self.dispatch(rb, path).await?;
        Ok(response.bytes().await.map_err(FineractError::from)?.to_vec())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, FineractError> {
        let rb = self.client.post(self.url(path)).multipart(form);
        Self::decode(self.dispatch(rb, path).await?).await
    }
}

/// Build a multipart file part with a content type guessed from the file
/// name.
pub(crate) fn file_part(
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<reqwest::multipart::Part, FineractError> {
    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
    reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime.essence_str())
        .map_err(|e| FineractError::InvalidParameter(format!("invalid content type: {e}")))
}
