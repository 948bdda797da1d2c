//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `RequestConfig` is the per-verb
//! method/headers/body triple; `HttpRequest` pairs it with an absolute URL so
//! a `Transport` can execute it. Nothing in this module touches the network.

use serde::Serialize;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Method, headers and optional body for a single call.
///
/// `Default` is a bare GET. Body-less verbs carry only a method; POST and
/// PATCH carry a JSON content-type header and the serialized payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestConfig {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn put() -> Self {
        Self::bare(HttpMethod::Put)
    }

    pub fn delete() -> Self {
        Self::bare(HttpMethod::Delete)
    }

    /// POST with `data` serialized as the JSON body.
    pub fn post<T: Serialize + ?Sized>(data: &T) -> Result<Self, ApiError> {
        Self::json(HttpMethod::Post, data)
    }

    pub fn patch<T: Serialize + ?Sized>(data: &T) -> Result<Self, ApiError> {
        Self::json(HttpMethod::Patch, data)
    }

    /// Append an `authorization: Bearer <token>` header.
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.headers
            .push(("authorization".to_string(), format!("Bearer {token}")));
        self
    }

    fn bare(method: HttpMethod) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    fn json<T: Serialize + ?Sized>(method: HttpMethod, data: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(data).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(Self {
            method,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// An HTTP request described as plain data, ready for a `Transport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(path: String, config: RequestConfig) -> Self {
        Self {
            method: config.method,
            path,
            headers: config.headers,
            body: config.body,
        }
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup; first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    #[test]
    fn get_is_the_default_config() {
        let config = RequestConfig::get();
        assert_eq!(config.method, HttpMethod::Get);
        assert!(config.headers.is_empty());
        assert!(config.body.is_none());
        assert_eq!(config, RequestConfig::default());
    }

    #[test]
    fn put_and_delete_carry_only_a_method() {
        let put = RequestConfig::put();
        assert_eq!(put.method, HttpMethod::Put);
        assert!(put.headers.is_empty());
        assert!(put.body.is_none());

        let delete = RequestConfig::delete();
        assert_eq!(delete.method, HttpMethod::Delete);
        assert!(delete.headers.is_empty());
        assert!(delete.body.is_none());
    }

    #[test]
    fn post_serializes_data_with_json_header() {
        let data = json!({"email": "brown@email.com", "password": "brown"});
        let config = RequestConfig::post(&data).unwrap();
        assert_eq!(config.method, HttpMethod::Post);
        assert_eq!(
            config.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert_eq!(config.body.unwrap(), serde_json::to_string(&data).unwrap());
    }

    #[test]
    fn patch_is_built_like_post() {
        let data = json!({"name": "brown"});
        let config = RequestConfig::patch(&data).unwrap();
        assert_eq!(config.method, HttpMethod::Patch);
        assert_eq!(config.body.as_deref(), Some(r#"{"name":"brown"}"#));
    }

    #[test]
    fn with_bearer_appends_authorization() {
        let config = RequestConfig::delete().with_bearer("abc");
        assert_eq!(
            config.headers,
            vec![("authorization".to_string(), "Bearer abc".to_string())]
        );
    }

    #[test]
    fn is_success_covers_2xx_only() {
        assert!(response(200).is_success());
        assert!(response(201).is_success());
        assert!(response(204).is_success());
        assert!(response(299).is_success());
        assert!(!response(199).is_success());
        assert!(!response(300).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let resp = HttpResponse {
            status: 201,
            headers: vec![("Location".to_string(), "/members/1".to_string())],
            body: String::new(),
        };
        assert_eq!(resp.header("location"), Some("/members/1"));
        assert_eq!(resp.header("etag"), None);
    }
}
