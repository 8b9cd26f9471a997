//! Web Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors go through `kernel::error::AppError` in the library crates.

mod app;
mod config;
mod pages;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use auth::HttpSessionAuthority;
use booking::GraphQlBookingClient;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::WebConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,auth=info,booking=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WebConfig::from_env()?;

    let authority = HttpSessionAuthority::new(&config.auth)?;
    tracing::info!(
        endpoint = authority.endpoint(),
        timeout_secs = config.auth.authority_timeout.map(|t| t.as_secs()),
        "Session authority configured"
    );
    if config.auth.authority_timeout.is_none() {
        tracing::warn!("AUTHORITY_TIMEOUT_SECS unset, a hung authority blocks guarded pages");
    }

    let bookings = GraphQlBookingClient::new(&config.booking)?;
    tracing::info!(endpoint = bookings.endpoint(), "Booking API configured");

    let app = app::build_app(
        Arc::new(authority),
        Arc::new(bookings),
        config.auth.clone(),
        &config.frontend_origins,
    );

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
