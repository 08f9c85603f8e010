//! Review lamp relay binary.
//!
//! Reads configuration from the environment, builds the relay, and serves
//! the lamp endpoint until ctrl-c.

use review_lamp::{
    serve, AppError, GitHubClient, GitHubClientConfig, RelayConfig, RelayState, ReviewRelay,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RelayConfig::from_env()?;
    log::info!(
        "Loaded {} color mapping(s), outbound timeout {}s",
        config.colors.len(),
        config.timeout_secs
    );

    let client = GitHubClient::new(GitHubClientConfig {
        timeout_secs: config.timeout_secs,
        ..GitHubClientConfig::default()
    })?;
    let relay = ReviewRelay::new(client, config.colors.clone());
    let state = RelayState {
        relay: Arc::new(relay),
    };

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", config.listen_addr, e)))?;

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Shutdown signal received");
            shutdown.cancel();
        }
    });

    serve(listener, state, cancel).await
}
