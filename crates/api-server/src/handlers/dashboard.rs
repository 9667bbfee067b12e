use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, response::Json};
use common::TotalResponse;

pub async fn total_users(State(state): State<AppState>) -> Result<Json<TotalResponse>, ApiError> {
    let total = state
        .admin_app
        .dashboard_service
        .total_users()
        .await
        .map_err(|e| state.fail(e, "Error fetching user count."))?;

    Ok(Json(TotalResponse { total }))
}

pub async fn total_products(
    State(state): State<AppState>,
) -> Result<Json<TotalResponse>, ApiError> {
    let total = state
        .admin_app
        .dashboard_service
        .total_products()
        .await
        .map_err(|e| state.fail(e, "Error fetching product count."))?;

    Ok(Json(TotalResponse { total }))
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
