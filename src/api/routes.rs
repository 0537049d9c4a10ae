use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use super::exercises::{add_exercise, get_logs};
use super::health::health_check;
use super::users::{create_user, list_users};
use crate::services::TrackerService;

#[derive(Clone)]
pub struct AppState {
    pub tracker: TrackerService,
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id/exercises", post(add_exercise))
        .route("/users/:id/logs", get(get_logs))
}

/// Full application: health check, the `/api` routes, and static assets
/// from `public_dir` for every other path.
pub fn create_routes(tracker: TrackerService, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(AppState { tracker })
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
