use std::sync::Arc;

use anyhow::Context;
use financeai_backend::{
    config::Config, routes, services::gemini::GeminiClient, state::AppState, telemetry,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("info");

    let config = Config::from_env().context("loading configuration")?;
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; chat requests will answer 503 until it is configured");
    }

    let gateway = GeminiClient::from_config(&config).context("building completion client")?;
    let state = Arc::new(AppState::new(Arc::new(gateway)));

    let app = routes::create_router()
        .route("/", axum::routing::get(|| async { "FinanceAI backend is running" }))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, model = %config.gemini_model, "FinanceAI chat backend listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
