use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Exercise, User};

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<Uuid, User>,
    /// Creation order of `users`, so listings are stable.
    order: Vec<Uuid>,
    logs: HashMap<Uuid, Vec<Exercise>>,
}

/// In-memory users and their exercise logs.
///
/// Both maps sit behind one lock, so every operation sees them in a
/// consistent state and each write either fully applies or not at all.
/// Cloning yields another handle onto the same data.
#[derive(Debug, Clone, Default)]
pub struct TrackerStore {
    state: Arc<RwLock<StoreState>>,
}

impl TrackerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new user under a freshly generated identifier and gives it
    /// an empty log.
    pub async fn insert_user(&self, username: &str) -> User {
        let mut state = self.state.write().await;

        let mut user = User::new(username);
        while state.users.contains_key(&user.id) {
            user = User::new(username);
        }

        state.order.push(user.id);
        state.logs.insert(user.id, Vec::new());
        state.users.insert(user.id, user.clone());
        user
    }

    pub async fn list_users(&self) -> Vec<User> {
        let state = self.state.read().await;
        state
            .order
            .iter()
            .filter_map(|id| state.users.get(id).cloned())
            .collect()
    }

    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn find_user(&self, id: &Uuid) -> Option<User> {
        self.state.read().await.users.get(id).cloned()
    }

    /// Appends to the user's log. Returns `None` without touching the store
    /// when the user does not exist.
    pub async fn append_exercise(&self, id: &Uuid, exercise: Exercise) -> Option<User> {
        let mut state = self.state.write().await;
        let user = state.users.get(id).cloned()?;
        state.logs.entry(*id).or_default().push(exercise);
        Some(user)
    }

    /// Snapshot of a user together with their log in insertion order.
    pub async fn user_log(&self, id: &Uuid) -> Option<(User, Vec<Exercise>)> {
        let state = self.state.read().await;
        let user = state.users.get(id).cloned()?;
        let log = state.logs.get(id).cloned().unwrap_or_default();
        Some((user, log))
    }
}
