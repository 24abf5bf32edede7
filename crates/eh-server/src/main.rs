use anyhow::Context;
use eh_core::EcoHomeConfig;
use eh_server::{app_with_state, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var("ECOHOME_CONFIG") {
        Ok(path) => EcoHomeConfig::from_file(&path).with_context(|| format!("loading {path}"))?,
        Err(_) => EcoHomeConfig::default(),
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "EcoHome advisor listening");

    axum::serve(listener, app_with_state(AppState::with_config(&config))).await?;
    Ok(())
}
