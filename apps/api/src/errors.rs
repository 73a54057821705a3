#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only `Validation` and `Internal` are expected to reach the end user as
/// failures: configuration and remote-service problems are absorbed by the
/// fallback generators upstream of any handler return. The `Service` variant
/// exists for the one path with no meaningful fallback (ending a real
/// conversation).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error on '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Remote service error: {0}")]
    Service(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                format!("Missing or invalid field: {field}"),
                Some(reason.clone()),
            ),
            AppError::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone(), None)
            }
            AppError::Service(msg) => {
                tracing::error!("Remote service error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    msg.clone(),
                    Some("Unable to reach the remote service at this time. Please try again later.".to_string()),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some("An unexpected error occurred while processing your request.".to_string()),
                )
            }
        };

        let body = match details {
            Some(details) => Json(json!({ "error": error, "details": details })),
            None => Json(json!({ "error": error })),
        };

        (status, body).into_response()
    }
}
