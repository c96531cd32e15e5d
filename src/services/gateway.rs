// src/services/gateway.rs
use async_trait::async_trait;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("GEMINI_API_KEY not configured")]
    MissingApiKey,
    #[error("completion request timed out")]
    Timeout,
    #[error("completion request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("completion API returned {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },
    #[error("completion API response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("no candidates in completion API response")]
    EmptyCandidates,
    #[error("first candidate carries no text part")]
    MissingText,
}

impl GatewayError {
    /// Misconfiguration of this service rather than a failure upstream.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::MissingApiKey)
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_decode() {
            GatewayError::Decode(err)
        } else {
            GatewayError::Transport(err)
        }
    }
}

/// Boundary to the generative-text service. One call, no retries.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError>;
}
