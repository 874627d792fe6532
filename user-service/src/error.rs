// Errors surfaced by the users backend

use crate::models::UserId;

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single call against the `/users` resource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("user {0} not found")]
    NotFound(UserId),

    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the server answered, as opposed to a connection failure
    pub fn is_server_response(&self) -> bool {
        matches!(self, ApiError::NotFound(_) | ApiError::Status { .. })
    }
}
