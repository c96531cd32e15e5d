// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const INVALID_HISTORY: &str = "Invalid conversation history";
pub const INVALID_BODY: &str = "Invalid request body";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn label(self) -> &'static str {
        match self {
            Sender::User => "User",
            Sender::Bot => "Assistant",
        }
    }
}

/// One message of the client-held conversation.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Turn {
    #[serde(default)]
    pub id: String,
    pub text: String,
    pub sender: Sender,
    // Opaque to the server; kept only so clients can round-trip it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { id: String::new(), text: text.into(), sender: Sender::User, timestamp: None }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { id: String::new(), text: text.into(), sender: Sender::Bot, timestamp: None }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub conversation_history: Option<Vec<Turn>>,
}

impl ChatRequest {
    /// Validates a raw JSON body field by field so each failure gets its own message.
    pub fn from_json(body: Value) -> Result<Self, AppError> {
        let Value::Object(mut fields) = body else {
            return Err(AppError::BadRequest(MESSAGE_REQUIRED.to_string()));
        };

        let message = match fields.remove("message") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => return Err(AppError::BadRequest(MESSAGE_REQUIRED.to_string())),
        };

        let session_id = match take_optional(&mut fields, "sessionId") {
            None => None,
            Some(Value::String(s)) => Some(s),
            Some(_) => return Err(AppError::BadRequest(INVALID_BODY.to_string())),
        };

        let conversation_history = match take_optional(&mut fields, "conversationHistory") {
            None => None,
            Some(raw) => Some(
                serde_json::from_value::<Vec<Turn>>(raw)
                    .map_err(|_| AppError::BadRequest(INVALID_HISTORY.to_string()))?,
            ),
        };

        Ok(Self { message, session_id, conversation_history })
    }

    pub fn history(&self) -> &[Turn] {
        self.conversation_history.as_deref().unwrap_or_default()
    }
}

fn take_optional(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    match fields.remove(key) {
        Some(Value::Null) | None => None,
        Some(v) => Some(v),
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DemoResponse {
    pub message: String,
    pub timestamp: String,
    pub status: String,
}
