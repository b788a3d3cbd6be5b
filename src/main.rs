use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use smart_summarizer::build_state;
use smart_summarizer::config::Config;
use smart_summarizer::server::router;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load();

    let state = build_state(&config)
        .context("Failed to initialize summarizer (is OPENAI_API_KEY set in .env?)")?;

    let bind: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address '{}' (expected host:port)",
                config.server.bind
            )
        })?;

    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(
        %bind,
        name = %config.server.name,
        version = %config.server.version,
        model = %config.llm.model,
        "Starting summarizer HTTP server"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
