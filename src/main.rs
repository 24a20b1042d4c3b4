use anyhow::Context;
use deezer_relay::{AppState, app, secrets::SECRET_MANAGER, serve::Runner};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = SECRET_MANAGER.config()?;
    let state = AppState::new(&config).context("failed to build the upstream http client")?;
    info!("🔎 Deezer search upstream: {}", state.search.search_url());

    Runner::for_config(&config).run(app(state)).await
}
