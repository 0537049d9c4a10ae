use serde::Serialize;
use uuid::Uuid;

use super::date::CalendarDate;

/// A single logged exercise. Entries are only ever appended to a user's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub description: String,
    pub duration: i64,
    pub date: CalendarDate,
}

/// Returned after an exercise has been appended to a user's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: CalendarDate,
    pub id: Uuid,
}

/// A user's log after `from`, `to` and `limit` have been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseLog {
    pub username: String,
    /// Number of entries in `log`, i.e. after the limit is applied.
    pub count: usize,
    pub id: Uuid,
    pub log: Vec<Exercise>,
}
