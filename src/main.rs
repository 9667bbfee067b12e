mod render;

use common::Category;
use config::ClientConfig;
use frontend::{ApiClient, Route};
use std::env;
use std::str::FromStr;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("frontend=info")),
        )
        .init();

    let config = ClientConfig::from_env(None).map_err(|e| {
        error!("Configuration error: {}", e);
        e
    })?;

    let route = Route::from_path(&env::args().nth(1).unwrap_or_else(|| "/".to_string()));
    let client = ApiClient::new(config.api_base_url);

    println!("🧺 Pantry Admin - {}", route.title());
    println!("   API: {}", client.base_url());
    println!();

    match route {
        Route::Dashboard => render::dashboard(client).await,
        Route::Products => {
            let search = env::var("PRODUCT_SEARCH").unwrap_or_default();
            let category = match env::var("PRODUCT_CATEGORY") {
                Ok(raw) if !raw.trim().is_empty() => match Category::from_str(raw.trim()) {
                    Ok(category) => Some(category),
                    Err(e) => {
                        warn!("Ignoring PRODUCT_CATEGORY: {}", e);
                        None
                    }
                },
                _ => None,
            };
            render::products(client, &search, category).await
        }
        Route::Customers => render::customers(client).await,
        Route::Chat => render::chat(),
    }

    Ok(())
}
