// src/services/chatbot.rs
use tracing::info;

use super::classifier::matched_keyword;
use super::gateway::{CompletionGateway, GatewayError};
use super::prompt::{build_prompt, prior_turns};
use crate::message::Turn;
use crate::rules::REFUSAL_TEXT;

#[derive(Debug, PartialEq, Eq)]
pub enum Topic {
    Finance,
    OffTopic,
}

pub fn detect_topic(msg: &str) -> Topic {
    match matched_keyword(msg) {
        Some(_) => Topic::Finance,
        None => Topic::OffTopic,
    }
}

/// Successful end states of a chat turn.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Off-topic message answered with the canned refusal; the gateway is not called.
    Refused,
    Completed(String),
}

impl Reply {
    pub fn into_text(self) -> String {
        match self {
            Reply::Refused => REFUSAL_TEXT.to_string(),
            Reply::Completed(text) => text,
        }
    }
}

/// Classify, assemble the prompt, and make the single upstream call.
pub async fn generate_reply(
    gateway: &dyn CompletionGateway,
    user_msg: &str,
    history: &[Turn],
) -> Result<Reply, GatewayError> {
    if detect_topic(user_msg) == Topic::OffTopic {
        info!("message refused as off-topic");
        return Ok(Reply::Refused);
    }

    let prior = prior_turns(history, user_msg);
    let prompt = build_prompt(prior, user_msg);

    let text = gateway.complete(&prompt).await?;
    info!(prior_turns = prior.len(), reply_len = text.len(), "completion received");
    Ok(Reply::Completed(text))
}
