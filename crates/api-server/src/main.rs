use config::AppConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(api_server::DEFAULT_LOG_FILTER)),
        )
        .init();

    info!("🚀 Starting pantry admin API server");

    // A missing connection string stops the process here
    let config = AppConfig::from_env(None).map_err(|e| {
        error!("Configuration error: {}", e);
        e
    })?;

    api_server::serve(config).await
}
