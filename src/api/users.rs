use axum::{extract::State, response::Json};
use serde::Deserialize;

use super::extract::{lenient_string, JsonOrForm};
use super::routes::AppState;
use crate::errors::TrackerError;
use crate::models::User;

#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
}

/// Create a user
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<CreateUserRequest>,
) -> Result<Json<User>, TrackerError> {
    let user = state.tracker.create_user(request.username.as_deref()).await?;
    Ok(Json(user))
}

/// List every user in creation order
/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.tracker.list_users().await)
}
