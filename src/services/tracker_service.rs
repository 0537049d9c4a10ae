use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::clock::{Clock, SystemClock};
use super::store::TrackerStore;
use crate::errors::TrackerError;
use crate::models::{CalendarDate, Exercise, ExerciseLog, ExerciseResponse, User};

/// Raw fields of an exercise submission, as received.
#[derive(Debug, Clone, Default)]
pub struct NewExercise {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// Raw `from`, `to` and `limit` query values. Values that do not parse are
/// ignored rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

#[derive(Clone)]
pub struct TrackerService {
    store: TrackerStore,
    clock: Arc<dyn Clock>,
}

impl TrackerService {
    pub fn new(store: TrackerStore) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: TrackerStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// A service over a fresh, empty store.
    pub fn in_memory() -> Self {
        Self::new(TrackerStore::new())
    }

    pub async fn create_user(&self, username: Option<&str>) -> Result<User, TrackerError> {
        let username = username
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| TrackerError::validation("username required"))?;

        let user = self.store.insert_user(username).await;
        info!("Created user {} ({})", user.username, user.id);
        Ok(user)
    }

    pub async fn list_users(&self) -> Vec<User> {
        self.store.list_users().await
    }

    pub async fn user_count(&self) -> usize {
        self.store.user_count().await
    }

    /// Checks, in order: the user exists, a description is given, a duration
    /// is given and numeric, and a supplied date parses. Nothing is stored
    /// unless every check passes.
    pub async fn add_exercise(
        &self,
        user_id: &str,
        input: NewExercise,
    ) -> Result<ExerciseResponse, TrackerError> {
        let id = parse_user_id(user_id)?;
        self.store
            .find_user(&id)
            .await
            .ok_or_else(TrackerError::unknown_user)?;

        let description = input
            .description
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| TrackerError::validation("description required"))?;
        let duration = input
            .duration
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| TrackerError::validation("duration required"))
            .and_then(parse_duration)?;
        let date = match input.date.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(raw) => raw
                .parse::<CalendarDate>()
                .map_err(|_| TrackerError::format("invalid date"))?,
            None => CalendarDate::new(self.clock.today()),
        };

        let exercise = Exercise {
            description,
            duration,
            date,
        };
        let user = self
            .store
            .append_exercise(&id, exercise.clone())
            .await
            .ok_or_else(TrackerError::unknown_user)?;

        info!(
            "Logged exercise for {}: {} ({}) on {}",
            user.id, exercise.description, exercise.duration, exercise.date
        );

        Ok(ExerciseResponse {
            username: user.username,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
            id: user.id,
        })
    }

    /// Applies `from`, then `to`, then `limit`; insertion order is kept.
    pub async fn exercise_log(
        &self,
        user_id: &str,
        filter: &LogFilter,
    ) -> Result<ExerciseLog, TrackerError> {
        let id = parse_user_id(user_id)?;
        let (user, mut log) = self
            .store
            .user_log(&id)
            .await
            .ok_or_else(TrackerError::unknown_user)?;

        if let Some(from) = filter_date("from", filter.from.as_deref()) {
            log.retain(|entry| entry.date >= from);
        }
        if let Some(to) = filter_date("to", filter.to.as_deref()) {
            log.retain(|entry| entry.date <= to);
        }
        if let Some(limit) = filter.limit.as_deref().and_then(parse_limit) {
            log.truncate(limit);
        }

        Ok(ExerciseLog {
            username: user.username,
            count: log.len(),
            id: user.id,
            log,
        })
    }
}

fn parse_user_id(raw: &str) -> Result<Uuid, TrackerError> {
    Uuid::parse_str(raw.trim()).map_err(|_| TrackerError::unknown_user())
}

/// Any finite number is accepted and stored in whole units, truncated toward
/// zero: `"30"`, `" 30 "`, `"30.0"` and `"30.9"` are all 30.
pub fn parse_duration(raw: &str) -> Result<i64, TrackerError> {
    let trimmed = raw.trim();
    if let Ok(whole) = trimmed.parse::<i64>() {
        return Ok(whole);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.abs() < 9.0e15 => Ok(value.trunc() as i64),
        _ => Err(TrackerError::format("duration must be a number")),
    }
}

/// Non-negative counts only; fractions are truncated.
pub fn parse_limit(raw: &str) -> Option<usize> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value.trunc() as usize),
        _ => {
            debug!("Ignoring limit {:?}", raw);
            None
        }
    }
}

fn filter_date(name: &str, raw: Option<&str>) -> Option<CalendarDate> {
    let raw = raw?;
    match raw.parse() {
        Ok(date) => Some(date),
        Err(_) => {
            debug!("Ignoring {} filter {:?}", name, raw);
            None
        }
    }
}
