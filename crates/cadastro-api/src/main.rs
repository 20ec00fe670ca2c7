//! # cadastro-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the registration form backend.
//! Binds to a configurable port (default 8080).

use cadastro_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let config = AppConfig { port };

    // Acquire the database pool once; handlers share it through AppState.
    let pool = cadastro_api::db::init_pool().map_err(|e| {
        tracing::error!("Database configuration failed: {e}");
        e
    })?;

    let state = AppState::new(config, pool);
    let app = cadastro_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Cadastro API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
