// src/routes/demo.rs
use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::message::DemoResponse;
use crate::rules::DEMO_TEXT;

pub async fn demo_handler() -> Json<DemoResponse> {
    Json(DemoResponse {
        message: DEMO_TEXT.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        status: "success".to_string(),
    })
}
