use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use super::extract::{lenient_string, JsonOrForm};
use super::routes::AppState;
use crate::errors::TrackerError;
use crate::models::{ExerciseLog, ExerciseResponse};
use crate::services::{LogFilter, NewExercise};

#[derive(Debug, Default, Deserialize)]
pub struct CreateExerciseRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
}

impl From<CreateExerciseRequest> for NewExercise {
    fn from(request: CreateExerciseRequest) -> Self {
        NewExercise {
            description: request.description,
            duration: request.duration,
            date: request.date,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    /// Keep entries on or after this date
    pub from: Option<String>,
    /// Keep entries on or before this date
    pub to: Option<String>,
    /// Maximum number of entries to return
    pub limit: Option<String>,
}

impl From<LogQuery> for LogFilter {
    fn from(query: LogQuery) -> Self {
        LogFilter {
            from: query.from,
            to: query.to,
            limit: query.limit,
        }
    }
}

/// Log an exercise for a user
/// POST /api/users/:id/exercises
pub async fn add_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    JsonOrForm(request): JsonOrForm<CreateExerciseRequest>,
) -> Result<Json<ExerciseResponse>, TrackerError> {
    let response = state.tracker.add_exercise(&user_id, request.into()).await?;
    Ok(Json(response))
}

/// Get a user's exercise log, optionally narrowed by `from`, `to` and `limit`
/// GET /api/users/:id/logs
pub async fn get_logs(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    WithRejection(Query(query), _): WithRejection<Query<LogQuery>, TrackerError>,
) -> Result<Json<ExerciseLog>, TrackerError> {
    let filter = LogFilter::from(query);
    let log = state.tracker.exercise_log(&user_id, &filter).await?;
    Ok(Json(log))
}
