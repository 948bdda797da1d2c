//! Async request wrapper for the subway API.
//!
//! # Design
//! `ApiClient` holds a `base_url` and a `Transport` and carries no mutable
//! state between calls. `request` turns any non-2xx status into
//! `ApiError::Rejected`; `request_with_json_data` additionally parses the
//! body. Endpoint groups (`line`, `path`, `member`, `me`, `favorite`) are
//! borrowed views that bind these two primitives to concrete URIs.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::endpoints::{FavoriteApi, LineApi, MeApi, MemberApi, PathApi};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, RequestConfig};
use crate::transport::{ReqwestTransport, Transport};

#[derive(Debug, Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(ClientConfig::new(base_url), ReqwestTransport::new())
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }

    /// Client for the base URL named by `SUBWAY_API_URL`.
    pub fn from_env() -> Self {
        Self::from_config(ClientConfig::from_env())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue `config` against `base_url + uri`.
    ///
    /// Returns the response unchanged when its status is 2xx. Any other
    /// status becomes `ApiError::Rejected` and the response is dropped.
    pub async fn request(
        &self,
        uri: &str,
        config: RequestConfig,
    ) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest::new(format!("{}{uri}", self.base_url), config);
        debug!(method = request.method.as_str(), path = %request.path, "sending request");

        let response = self.transport.execute(request).await?;
        if response.is_success() {
            return Ok(response);
        }
        debug!(status = response.status, uri, "request rejected");
        Err(ApiError::Rejected)
    }

    /// Same as `request`, then parses the successful body as JSON.
    pub async fn request_with_json_data<R: DeserializeOwned>(
        &self,
        uri: &str,
        config: RequestConfig,
    ) -> Result<R, ApiError> {
        let response = self.request(uri, config).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn line(&self) -> LineApi<'_, T> {
        LineApi::new(self)
    }

    pub fn path(&self) -> PathApi<'_, T> {
        PathApi::new(self)
    }

    pub fn member(&self) -> MemberApi<'_, T> {
        MemberApi::new(self)
    }

    pub fn me(&self) -> MeApi<'_, T> {
        MeApi::new(self)
    }

    pub fn favorite(&self) -> FavoriteApi<'_, T> {
        FavoriteApi::new(self)
    }
}
