use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use super::routes::AppState;

/// Liveness plus a summary of what the in-memory store currently holds
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "users": state.tracker.user_count().await,
    }))
}
