// src/routes/mod.rs
pub mod chat;
pub mod demo;

use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    Router,
    http::{HeaderName, Method, StatusCode, header},
    routing::{get, post},
};
use chat::chat_handler;
use demo::demo_handler;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/chat",
            post(chat_handler).options(preflight).fallback(method_not_allowed),
        )
        .route(
            "/api/demo",
            get(demo_handler).options(preflight).fallback(method_not_allowed),
        )
        .route("/health", get(|| async { "OK" }))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers([
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
            header::ACCEPT,
            HeaderName::from_static("accept-version"),
            header::CONTENT_LENGTH,
            HeaderName::from_static("content-md5"),
            header::CONTENT_TYPE,
            header::DATE,
            HeaderName::from_static("x-api-version"),
        ])
}

// Bare OPTIONS without CORS request headers; real preflights are answered by the CORS layer.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
