use std::env;

use tracing_subscriber::EnvFilter;

use travel_settlement::api::{AppState, create_router};
use travel_settlement::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        env::var("SETTLEMENT_CONFIG_DIR").unwrap_or_else(|_| "./config/pino".to_string());
    let bind = env::var("SETTLEMENT_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let config = ConfigLoader::load(&config_dir)?.into_config();
    let state = AppState::from_config(config)?;

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(bind = %bind, config_dir = %config_dir, "travel settlement api started");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
