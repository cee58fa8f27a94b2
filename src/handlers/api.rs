use axum::{extract::State, response::IntoResponse, Json};
use axum_extra::extract::cookie::CookieJar;

use super::existing_session_id;
use crate::quiz::QuizSession;
use crate::state::AppState;

/// GET /api/session - JSON snapshot of the caller's session
///
/// Without a cookie this reports a fresh session without storing one.
pub async fn session_state(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let view = match existing_session_id(&jar) {
        Some(session_id) => state.sessions.with_session(&session_id, |session| session.view()),
        None => QuizSession::new().view(),
    };
    Json(view)
}
