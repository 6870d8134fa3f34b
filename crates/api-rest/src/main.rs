//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development when working on the API crate alone. The workspace's main
//! `vitals-run` binary serves the same router.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the vitals REST API server
///
/// # Environment Variables
/// - `VITALS_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `VITALS_DATA_DIR`: Record storage directory (default: "patient_data")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the data directory is unusable,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("vitals_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr =
        std::env::var(api_rest::REST_ADDR_ENV).unwrap_or_else(|_| api_rest::DEFAULT_REST_ADDR.into());

    tracing::info!("-- Starting vitals REST API on {}", addr);

    let state = api_rest::state_from_env()?;
    api_rest::serve(&addr, state).await
}
