// src/state.rs
use std::sync::Arc;

use crate::services::gateway::CompletionGateway;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub gateway: Arc<dyn CompletionGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { gateway }
    }
}
