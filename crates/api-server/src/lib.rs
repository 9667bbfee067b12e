use application::AdminApp;
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use config::AppConfig;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

use handlers::*;
pub use state::AppState;

pub const DEFAULT_LOG_FILTER: &str = "api_server=debug,tower_http=debug,infrastructure=info,domain=info";

/// Build the HTTP surface. No authentication: this is a trusted-network tool.
pub fn router(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        // Products
        .route("/add-product", post(add_product))
        .route("/products", get(list_products))
        .route("/products/:id", put(update_product).delete(delete_product))
        // Customer profiles
        .route("/profiles", get(list_profiles).post(add_profile))
        .route("/profiles/:id", delete(delete_profile))
        // Dashboard counters
        .route("/total-users", get(total_users))
        .route("/total-products", get(total_products))
        // Health check
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the database, serve until Ctrl+C / SIGTERM, then close the database.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let admin_app = Arc::new(AdminApp::open(&config.database_url)?);
    info!("💾 Using database: {}", admin_app.database_location());

    let state = AppState::new(admin_app.clone(), config.expose_error_details);
    let app = router(state, config.body_limit_bytes());

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    info!("🌐 Server running on http://{}", bind_address);
    info!("   POST   /add-product      - Add product (multipart, optional image)");
    info!("   GET    /products         - List products");
    info!("   PUT    /products/:id     - Update product");
    info!("   DELETE /products/:id     - Delete product");
    info!("   GET    /profiles         - List profiles");
    info!("   POST   /profiles         - Add profile");
    info!("   DELETE /profiles/:id     - Delete profile");
    info!("   GET    /total-users      - User count");
    info!("   GET    /total-products   - Product count");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match Arc::try_unwrap(admin_app) {
        Ok(admin_app) => admin_app.close(),
        Err(_) => warn!("Database handle still in use at shutdown"),
    }

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
