//! Endpoint groups bound to concrete URIs.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{HttpResponse, RequestConfig};
use crate::transport::Transport;
use crate::types::{
    FavoriteExistResponse, FavoriteRequest, FavoriteResponse, MemberResponse, PathQuery,
    TokenResponse, UpdateMemberRequest,
};

const LINES_DETAIL: &str = "/lines/detail";
const PATHS: &str = "/paths";
const MEMBERS: &str = "/members";
const OAUTH_TOKEN: &str = "/oauth/token";
const ME: &str = "/me";
const ME_FAVORITES: &str = "/me/favorites";

pub struct LineApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> LineApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Raw response of `GET /lines/detail`.
    pub async fn get_all(&self) -> Result<HttpResponse, ApiError> {
        self.client.request(LINES_DETAIL, RequestConfig::get()).await
    }

    /// Parsed body of `GET /lines/detail`.
    pub async fn get_all_detail(&self) -> Result<Value, ApiError> {
        self.client
            .request_with_json_data(LINES_DETAIL, RequestConfig::get())
            .await
    }
}

pub struct PathApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> PathApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /paths`. Query values are interpolated as-is, without
    /// percent-encoding.
    pub async fn find(&self, params: &PathQuery) -> Result<Value, ApiError> {
        self.client
            .request_with_json_data(&path_uri(params), RequestConfig::get())
            .await
    }
}

fn path_uri(params: &PathQuery) -> String {
    format!(
        "{PATHS}?source={}&target={}&type={}",
        params.source, params.target, params.path_type
    )
}

pub struct MemberApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> MemberApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `POST /members`. Every failure, including serialization, surfaces as
    /// `ApiError::JoinFailed`.
    pub async fn join<D: Serialize + ?Sized>(
        &self,
        data: &D,
    ) -> Result<HttpResponse, ApiError> {
        let attempt = async {
            let config = RequestConfig::post(data)?;
            self.client.request(MEMBERS, config).await
        };
        attempt.await.map_err(|cause| {
            warn!(%cause, "member join failed");
            ApiError::JoinFailed
        })
    }

    /// `POST /oauth/token`. Every failure, including an unparseable token
    /// body, surfaces as `ApiError::LoginFailed`.
    pub async fn login<D: Serialize + ?Sized>(
        &self,
        data: &D,
    ) -> Result<TokenResponse, ApiError> {
        let attempt = async {
            let config = RequestConfig::post(data)?;
            self.client
                .request_with_json_data::<TokenResponse>(OAUTH_TOKEN, config)
                .await
        };
        attempt.await.map_err(|cause| {
            warn!(%cause, "member login failed");
            ApiError::LoginFailed
        })
    }
}

/// Operations on the member owning `token`.
pub struct MeApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> MeApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn get(&self, token: &str) -> Result<MemberResponse, ApiError> {
        self.client
            .request_with_json_data(ME, RequestConfig::get().with_bearer(token))
            .await
    }

    pub async fn update(
        &self,
        token: &str,
        data: &UpdateMemberRequest,
    ) -> Result<HttpResponse, ApiError> {
        let config = RequestConfig::patch(data)?.with_bearer(token);
        self.client.request(ME, config).await
    }

    pub async fn delete(&self, token: &str) -> Result<HttpResponse, ApiError> {
        self.client
            .request(ME, RequestConfig::delete().with_bearer(token))
            .await
    }
}

pub struct FavoriteApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> FavoriteApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        token: &str,
        data: &FavoriteRequest,
    ) -> Result<HttpResponse, ApiError> {
        let config = RequestConfig::post(data)?.with_bearer(token);
        self.client.request(ME_FAVORITES, config).await
    }

    pub async fn get_all(&self, token: &str) -> Result<Vec<FavoriteResponse>, ApiError> {
        self.client
            .request_with_json_data(ME_FAVORITES, RequestConfig::get().with_bearer(token))
            .await
    }

    /// Whether a favorite from `source_id` to `target_id` is saved.
    pub async fn exists(
        &self,
        token: &str,
        source_id: i64,
        target_id: i64,
    ) -> Result<bool, ApiError> {
        let uri = format!("{ME_FAVORITES}/from/{source_id}/to/{target_id}");
        let response: FavoriteExistResponse = self
            .client
            .request_with_json_data(&uri, RequestConfig::get().with_bearer(token))
            .await?;
        Ok(response.exist)
    }

    pub async fn delete(&self, token: &str, favorite_id: i64) -> Result<HttpResponse, ApiError> {
        let uri = format!("{ME_FAVORITES}/{favorite_id}");
        self.client
            .request(&uri, RequestConfig::delete().with_bearer(token))
            .await
    }
}
