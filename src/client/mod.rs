//! Typed gateway client for the Soul Connection REST API.
//!
//! One async function per backend operation, grouped by resource in the
//! submodules. Every public operation swallows its failure: the caller gets
//! `None` (or `false` for deletes) for transport errors, non-2xx statuses and
//! malformed bodies alike, and the discarded detail goes to the log tagged
//! with the calling function's name. Callers own the user-visible messaging
//! and never see a panic or an error type from this layer.

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::ApiConfig;

mod clothes;
mod compatibility;
mod customers;
mod employees;
mod encounters;
mod events;
mod tips;

/// Client version sent in the user agent.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Failure detail kept for the log line only. The public surface collapses
/// all of these into an absent result.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(reqwest::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err)
        } else {
            ClientError::Transport(err)
        }
    }
}

/// Gateway client holding one shared HTTP connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured backend origin.
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_base_url(&config.base_url, config.timeout())
    }

    /// Create a client for an explicit origin. Used by tests against an
    /// in-process mock backend.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(format!("soul-connection/{}", CLIENT_VERSION))
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let response = self
            .request(reqwest::Method::GET, path, token)
            .send()
            .await?;
        decode(response).await
    }

    async fn get_bytes(&self, path: &str, token: Option<&str>) -> Result<Bytes, ClientError> {
        let response = self
            .request(reqwest::Method::GET, path, token)
            .send()
            .await?;
        let response = check_status(response)?;
        Ok(response.bytes().await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .request(reqwest::Method::POST, path, token)
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    async fn post_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        token: Option<&str>,
        query: &Q,
    ) -> Result<T, ClientError> {
        let response = self
            .request(reqwest::Method::POST, path, token)
            .query(query)
            .send()
            .await?;
        decode(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .request(reqwest::Method::PUT, path, token)
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), ClientError> {
        let response = self
            .request(reqwest::Method::DELETE, path, token)
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status(status))
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let response = check_status(response)?;
    Ok(response.json::<T>().await?)
}

/// Collapse a failed call to the uniform absence signal, keeping the
/// discarded detail in the log.
fn swallow<T>(call: &'static str, result: Result<T, ClientError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::error!(call, error = %error, "API call failed");
            None
        }
    }
}

/// Delete variant of [`swallow`]: success flag instead of a value.
fn swallow_flag(call: &'static str, result: Result<(), ClientError>) -> bool {
    swallow(call, result).is_some()
}
