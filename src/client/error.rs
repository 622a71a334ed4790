//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::types::{ApiErrorResponse, TASK_MISMATCH_CODE};

/// Errors returned by the dataset API client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Settings of one task applied to a dataset of another
    #[error("{0}")]
    TaskMismatch(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// Map an unsuccessful response to a typed error
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let (message, code) = match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(parsed) => (parsed.error.message, parsed.error.code),
            Err(_) if body.is_empty() => (
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
                None,
            ),
            Err(_) => (body.to_string(), None),
        };

        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::CONFLICT => Self::AlreadyExists(message),
            StatusCode::BAD_REQUEST if code.as_deref() == Some(TASK_MISMATCH_CODE) => {
                Self::TaskMismatch(message)
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::BadRequest(message),
            _ => Self::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_task_mismatch(&self) -> bool {
        matches!(self, Self::TaskMismatch(_))
    }
}
