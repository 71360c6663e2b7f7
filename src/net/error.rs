//! Error type shared by every resource client call.
//!
//! Resource clients never classify failures; they hand `ApiError` to the view,
//! which decides between a login redirect, field errors, or a banner.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

use super::types::ErrorBody;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, body: Option<ErrorBody> },
    /// Request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
    /// Called from a build without browser networking.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status, if the backend responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Decoded error body, if the backend sent a structured one.
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            Self::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// The backend's generic `error` message, if any.
    pub fn server_message(&self) -> Option<&str> {
        self.body().and_then(|b| b.error.as_deref())
    }

    /// Build a status error from a raw response body, keeping the body only
    /// when it parses as `ErrorBody`.
    pub fn from_status(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str::<ErrorBody>(raw_body).ok();
        Self::Status { status, body }
    }
}
