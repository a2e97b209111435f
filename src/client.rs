//! The Fineract platform client.
//!
//! Entry point of the crate: builds the underlying `reqwest` client from
//! [`HttpConfig`], validates the deployment settings, and hands out the
//! per-resource services.
//!
//! # Example
//!
//! ```rust,no_run
//! # use fineract_client::FineractClient;
//! # async fn example() -> Result<(), fineract_client::FineractError> {
//! let client = FineractClient::builder()
//!     .base_url("https://demo.mifos.io/fineract-provider/api/v1")
//!     .tenant("default")
//!     .basic_auth("mifos", "password")
//!     .build()?;
//!
//! let page = client.clients().get_all_clients(true, 0, 100).await?;
//! # Ok(())
//! # }
//! ```

use secrecy::SecretString;
use std::sync::Arc;

use crate::config::{Credentials, FineractConfig, HttpConfig};
use crate::error::FineractError;
use crate::http::HttpExecutor;
use crate::services::{ClientsService, DocumentsService, LoansService, SurveysService};

#[derive(Clone, Debug)]
pub struct FineractClient {
    http: HttpExecutor,
    config: Arc<FineractConfig>,
}

impl FineractClient {
    pub fn builder() -> FineractClientBuilder {
        FineractClientBuilder::default()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &FineractConfig {
        &self.config
    }

    pub fn clients(&self) -> ClientsService {
        ClientsService::new(self.http.clone())
    }

    pub fn loans(&self) -> LoansService {
        LoansService::new(self.http.clone())
    }

    pub fn documents(&self) -> DocumentsService {
        DocumentsService::new(self.http.clone())
    }

    pub fn surveys(&self) -> SurveysService {
        SurveysService::new(self.http.clone())
    }
}

#[derive(Default)]
pub struct FineractClientBuilder {
    base_url: Option<String>,
    tenant_id: Option<String>,
    credentials: Option<Credentials>,
    http_config: Option<HttpConfig>,
}

impl FineractClientBuilder {
    /// Base URL up to and including the API version segment.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: SecretString::from(password.into()),
        });
        self
    }

    pub fn http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = Some(http_config);
        self
    }

    pub fn build(self) -> Result<FineractClient, FineractError> {
        let base_url = self
            .base_url
            .ok_or_else(|| FineractError::InvalidParameter("base_url is required".into()))?;
        reqwest::Url::parse(&base_url)
            .map_err(|e| FineractError::InvalidParameter(format!("invalid base_url: {e}")))?;

        let mut config = FineractConfig::new(base_url);
        if let Some(tenant_id) = self.tenant_id {
            config.tenant_id = tenant_id;
        }
        config.credentials = self.credentials;
        if let Some(http) = self.http_config {
            config.http = http;
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.http.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.http.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(user_agent) = &config.http.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        if let Some(proxy) = &config.http.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| FineractError::InvalidParameter(format!("invalid proxy: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| FineractError::Http(format!("failed to build HTTP client: {e}")))?;

        let config = Arc::new(config);
        Ok(FineractClient {
            http: HttpExecutor::new(client, config.clone()),
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_base_url() {
        let err = FineractClient::builder().build().unwrap_err();
        assert!(matches!(err, FineractError::InvalidParameter(_)));
    }

    #[test]
    fn build_rejects_malformed_url() {
        let err = FineractClient::builder()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, FineractError::InvalidParameter(_)));
    }

    #[test]
    fn debug_output_redacts_password() {
        let client = FineractClient::builder()
            .base_url("https://demo.mifos.io/fineract-provider/api/v1")
            .basic_auth("mifos", "hunter2")
            .build()
            .unwrap();
        let dump = format!("{client:?}");
        assert!(dump.contains("mifos"));
        assert!(!dump.contains("hunter2"));
    }

    #[test]
    fn build_applies_tenant() {
        let client = FineractClient::builder()
            .base_url("https://demo.mifos.io/fineract-provider/api/v1")
            .tenant("acme")
            .build()
            .unwrap();
        assert_eq!(client.config().tenant_id, "acme");
    }
}
