//! Error types for the subway API client.
//!
//! # Design
//! Generic endpoints collapse every non-2xx status into `Rejected` with no
//! detail. Member join and login go further: whatever went wrong, the caller
//! only sees a fixed user-facing message.

use thiserror::Error;

/// User-facing messages for member operations.
pub mod messages {
    pub const JOIN_FAIL: &str = "Sign-up failed. Please check your details and try again.";
    pub const LOGIN_FAIL: &str = "Login failed. Please check your email and password.";
}

/// Errors returned by `ApiClient` and its endpoint groups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request rejected")]
    Rejected,

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("{}", messages::JOIN_FAIL)]
    JoinFailed,

    #[error("{}", messages::LOGIN_FAIL)]
    LoginFailed,
}
