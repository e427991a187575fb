//! # Product Store
//!
//! In-memory product catalog served over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! # Optional overrides (defaults: 0.0.0.0:8080)
//! export HOST=127.0.0.1
//! export PORT=8080
//!
//! # Run the server
//! product-store
//! ```

use store_api::{routes, state::AppState};
use tokio::signal;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let state = AppState::new();

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Products seeded: {}", state.store.read().await.len());

    let app = routes::create_router(state);

    info!("Product store starting on http://{}", addr);

    if !is_prod {
        info!("Ping: GET http://{}/api/v1/ping", addr);
        info!("Products: GET http://{}/api/v1/producto", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Product store stopped");
    Ok(())
}

/// Resolves on Ctrl-C. In-flight requests finish before the server exits.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}

fn print_banner() {
    println!(
        r#"
  Product Store RS
  ━━━━━━━━━━━━━━━━━━━━━━━
  In-memory product API
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
