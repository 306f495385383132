use std::{sync::Arc, time::Duration};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cdg::{
    config::Config,
    gateway::{GeminiClient, ModelGateway},
    server,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let gateway: Arc<dyn ModelGateway> = Arc::new(GeminiClient::new(
        reqwest::Client::new(),
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
        config.gemini_api_key.clone(),
        Duration::from_secs(config.gemini_timeout_secs),
    ));

    let app = server::build_router(gateway, config.max_body_bytes);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, model = %config.gemini_model, "damage assessment gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
    }
}
