// Mapping from HTTP failures to ApiError

use reqwest::StatusCode;
use serde::Deserialize;
use user_service::{ApiError, UserId};

/// Error body the backend sends with 4xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub(crate) fn transport(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Transport(err.to_string())
    }
}

pub(crate) fn decode(err: serde_json::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Turn a non-success response into an error. A 404 on a single-user
/// path means that user does not exist.
pub(crate) fn from_status(status: StatusCode, body: &str, id: Option<UserId>) -> ApiError {
    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return ApiError::NotFound(id);
        }
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string());
    let message = if message.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        message
    };

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}
