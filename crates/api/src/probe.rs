//! Downstream connectivity probe behind `/api/health/database`.
//!
//! The adapter owns transport details only: the request, its timeout, and the
//! mapping of HTTP/transport failures. Callers decide what to tell clients.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use crate::config::DatabaseConfig;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("downstream answered with status {0}")]
    UnexpectedStatus(u16),

    #[error("downstream timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("could not connect to downstream: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("downstream request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_connect() {
            Self::Connect(err)
        } else {
            Self::Transport(err)
        }
    }
}

/// Checks that the hosted database service is reachable and answering.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn check(&self) -> Result<(), ProbeError>;
}

/// Probe that issues one authenticated `GET` against the service's REST root.
pub struct HttpDatabaseProbe {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl HttpDatabaseProbe {
    /// Build a probe with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &DatabaseConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.rest_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl DatabaseProbe for HttpDatabaseProbe {
    async fn check(&self) -> Result<(), ProbeError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(()),
            other => Err(ProbeError::UnexpectedStatus(other.as_u16())),
        }
    }
}
