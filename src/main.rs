use std::sync::Arc;

use config::ServerConfig;
use dotenvy::dotenv;
use messages::MessageConfig;
use slack::SlackWebhookClient;
use tokio::signal::unix::{signal, SignalKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod handler;
mod interpreter;
mod messages;
mod oneclick;
mod router;
mod slack;
#[cfg(test)]
mod testing;

#[derive(Clone)]
pub struct ServerState {
    messages: Arc<MessageConfig>,
    slack: SlackWebhookClient,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_result = dotenv();
    init_tracing();
    match dotenv_result {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env file"),
        Err(_) => tracing::info!(".env file not found, ignoring..."),
    }

    let config = ServerConfig::from_env()?;
    let messages = MessageConfig::from_env();
    let slack = SlackWebhookClient::new(config.webhook_timeout)?;

    tracing::info!(
        "[START]: {} - v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    // Run axum server
    let server = config.bind_address();
    tracing::info!("Running Axum server on: {}", server);
    let listener = tokio::net::TcpListener::bind(&server).await?;
    axum::serve(
        listener,
        router::get_router().with_state(ServerState {
            messages: Arc::new(messages),
            slack,
        }),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolves on SIGTERM or SIGINT.
async fn shutdown_signal() {
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => tracing::info!("Received SIGTERM, shutting down"),
        _ = sigint.recv() => tracing::info!("Received SIGINT, shutting down"),
    }
}
