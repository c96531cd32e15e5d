// src/routes/chat.rs
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, MESSAGE_REQUIRED},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        warn!(error = %rejection, "unreadable chat body");
        AppError::BadRequest(MESSAGE_REQUIRED.to_string())
    })?;
    let request = ChatRequest::from_json(body)?;

    let span = info_span!(
        "chat",
        request_id = %Uuid::new_v4(),
        session_id = request.session_id.as_deref().unwrap_or("-")
    );

    let reply = generate_reply(state.gateway.as_ref(), &request.message, request.history())
        .instrument(span)
        .await?;

    Ok(Json(ChatResponse { response: reply.into_text() }))
}
