use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reasond::config::Config;
use reasond::llm::OpenAICompatibleProvider;
use reasond::server::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env().context("invalid configuration")?);
    let llm = Arc::new(OpenAICompatibleProvider::new(
        config.base_url.clone(),
        config.api_key.clone(),
    ));
    let state = AppState {
        config: config.clone(),
        llm,
    };
    let app = server::build_app(state, config.request_timeout_seconds);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(model = %config.model, %addr, "reasond listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
