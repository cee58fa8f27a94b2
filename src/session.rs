//! In-memory storage for quiz sessions.
//!
//! Stores QuizSession state keyed by session ID (from cookie).
//! Sessions auto-expire after a configurable duration of inactivity.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config;
use crate::quiz::QuizSession;

/// Session entry with last access time for expiration
struct SessionEntry {
    session: QuizSession,
    last_access: DateTime<Utc>,
}

/// Shared session map, owned by the application state.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the session for `session_id`, creating it if needed.
    ///
    /// All reads and mutations of a session go through here.
    pub fn with_session<R>(&self, session_id: &str, f: impl FnOnce(&mut QuizSession) -> R) -> R {
        // Session data stays valid even if a previous holder panicked
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Clean up expired sessions occasionally (~10% chance)
        if rand::random::<u8>() < config::SESSION_CLEANUP_THRESHOLD {
            cleanup_expired(&mut sessions, Utc::now());
        }

        let entry = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::debug!("New quiz session");
                SessionEntry {
                    session: QuizSession::new(),
                    last_access: Utc::now(),
                }
            });
        entry.last_access = Utc::now();
        f(&mut entry.session)
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .map(|s| s.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Drop sessions idle for longer than the expiry window
fn cleanup_expired(sessions: &mut HashMap<String, SessionEntry>, now: DateTime<Utc>) {
    let expiry = now - Duration::hours(config::SESSION_EXPIRY_HOURS);
    let before = sessions.len();
    sessions.retain(|_, entry| entry.last_access > expiry);
    let removed = before - sessions.len();
    if removed > 0 {
        tracing::debug!("Expired {} quiz sessions", removed);
    }
}

/// Generate a new session ID
pub fn generate_session_id() -> String {
    use rand::Rng;
    let mut rng = rand::rng();
    (0..32)
        .map(|_| {
            let idx = rng.random_range(0..36u8);
            if idx < 10 {
                (b'0' + idx) as char
            } else {
                (b'a' + idx - 10) as char
            }
        })
        .collect()
}
