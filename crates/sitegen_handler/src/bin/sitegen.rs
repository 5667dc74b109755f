//! Sitegen server - local HTTP host for the generation handler.

use sitegen_handler::{Handler, HandlerConfig, create_router};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = HandlerConfig::from_env()?;
    info!(
        model = %config.model(),
        api_key_configured = config.api_key().is_some(),
        "Starting Sitegen server"
    );

    let handler = Arc::new(Handler::new(config)?);
    let router = create_router(handler);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
