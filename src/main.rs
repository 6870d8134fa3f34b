use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the vitals tracker
///
/// Loads `.env`, initialises logging and serves the REST API (with Swagger UI at
/// `/swagger-ui`).
///
/// # Environment Variables
/// - `VITALS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `VITALS_DATA_DIR`: Directory for record storage (default: "patient_data")
/// - `RUST_LOG`: extra tracing directives
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup or the server itself fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vitals_run=info".parse()?)
                .add_directive("vitals_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var(api_rest::REST_ADDR_ENV)
        .unwrap_or_else(|_| api_rest::DEFAULT_REST_ADDR.into());

    tracing::info!("++ Starting vitals REST on {}", rest_addr);

    let state = api_rest::state_from_env()?;
    api_rest::serve(&rest_addr, state).await
}
