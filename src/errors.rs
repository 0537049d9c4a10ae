use axum::{
    extract::rejection::{FormRejection, JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every failure a caller can trigger is reported as `400 {"error": ...}`.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A required field is missing or empty.
    #[error("{0}")]
    Validation(String),
    /// The user identifier does not name a stored user.
    #[error("{0}")]
    NotFound(String),
    /// A field or body could not be parsed.
    #[error("{0}")]
    Format(String),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl TrackerError {
    pub fn validation(message: impl Into<String>) -> Self {
        TrackerError::Validation(message.into())
    }

    pub fn unknown_user() -> Self {
        TrackerError::NotFound("unknown _id".to_string())
    }

    pub fn format(message: impl Into<String>) -> Self {
        TrackerError::Format(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::Validation(_) | TrackerError::NotFound(_) | TrackerError::Format(_) => {
                StatusCode::BAD_REQUEST
            }
            TrackerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let TrackerError::Internal(err) = &self {
            tracing::error!("Unhandled error: {:#}", err);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for TrackerError {
    fn from(rejection: JsonRejection) -> Self {
        TrackerError::Format(rejection.body_text())
    }
}

impl From<FormRejection> for TrackerError {
    fn from(rejection: FormRejection) -> Self {
        TrackerError::Format(rejection.body_text())
    }
}

impl From<QueryRejection> for TrackerError {
    fn from(rejection: QueryRejection) -> Self {
        TrackerError::Format(rejection.body_text())
    }
}
