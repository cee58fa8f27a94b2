//! Application state shared by all handlers.

use std::sync::Arc;

use crate::content::ExerciseStore;
use crate::session::SessionStore;

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Exercise dataset, loaded once at startup
    pub exercises: Arc<ExerciseStore>,

    /// Per-browser quiz sessions
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(exercises: ExerciseStore) -> Self {
        Self {
            exercises: Arc::new(exercises),
            sessions: SessionStore::new(),
        }
    }
}
