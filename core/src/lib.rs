//! Async API client for the subway route-finder service.
//!
//! # Overview
//! Builds per-verb request configurations, sends them through a pluggable
//! `Transport`, and normalizes responses: 2xx passes through, anything else
//! is rejected. Member join and login map every failure onto a fixed
//! user-facing message.
//!
//! # Design
//! - `ApiClient` is stateless apart from `base_url` and its transport.
//! - Endpoint groups (`line`, `path`, `member`, `me`, `favorite`) borrow the
//!   client and bind `request` / `request_with_json_data` to fixed URIs.
//! - `Transport` keeps the I/O boundary explicit; `ReqwestTransport` is the
//!   default, tests swap in fakes.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{messages, ApiError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestConfig};
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    FavoriteExistResponse, FavoriteRequest, FavoriteResponse, JoinRequest, LoginRequest,
    MemberResponse, PathQuery, TokenResponse, UpdateMemberRequest,
};
