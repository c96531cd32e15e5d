// src/error.rs
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::message::{ChatResponse, ErrorBody};
use crate::rules::{RETRY_AFTER_SECS, SYSTEM_ERROR_TEXT, UNAVAILABLE_TEXT};
use crate::services::gateway::GatewayError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Json(ErrorBody { error: msg })).into_response(),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(ErrorBody { error: "Method not allowed".to_string() }),
            )
                .into_response(),
            AppError::Gateway(err) => {
                let (status, text) = if err.is_configuration() {
                    error!(error = %err, "completion gateway is not configured");
                    (StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_TEXT)
                } else {
                    error!(error = %err, "completion gateway failed");
                    (StatusCode::INTERNAL_SERVER_ERROR, SYSTEM_ERROR_TEXT)
                };
                (
                    status,
                    [(header::RETRY_AFTER, RETRY_AFTER_SECS.to_string())],
                    Json(ChatResponse { response: text.to_string() }),
                )
                    .into_response()
            }
        }
    }
}
