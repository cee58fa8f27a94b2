//! Quiz action handlers.
//!
//! Each handler applies one action to the caller's session and redirects
//! back to `/` so a page refresh never replays a form submission.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::session_cookie;
use crate::quiz::Level;
use crate::state::AppState;

/// POST /levels/{level} - start a level
pub async fn select_level(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(level): Path<String>,
) -> impl IntoResponse {
    let (jar, session_id) = session_cookie(jar);

    match level.parse::<u8>().ok().and_then(Level::new) {
        Some(level) => {
            state
                .sessions
                .with_session(&session_id, |session| session.select_level(level, &state.exercises));
        }
        None => tracing::warn!("Ignoring selection of invalid level {:?}", level),
    }

    (jar, Redirect::to("/"))
}

/// Form data for checking an answer.
#[derive(Deserialize)]
pub struct CheckForm {
    #[serde(default)]
    pub answer: String,
}

/// POST /check - record the typed answer and show the review panel
pub async fn check_answer(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CheckForm>,
) -> impl IntoResponse {
    let (jar, session_id) = session_cookie(jar);

    let checked = state.sessions.with_session(&session_id, |session| {
        session.set_draft(form.answer) && session.check_answer()
    });
    if !checked {
        tracing::debug!("Check ignored: session is not answering");
    }

    (jar, Redirect::to("/"))
}

/// POST /next - next exercise, or finish the level
pub async fn advance(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, session_id) = session_cookie(jar);

    if !state.sessions.with_session(&session_id, |session| session.advance()) {
        tracing::debug!("Advance ignored: session is not reviewing");
    }

    (jar, Redirect::to("/"))
}

/// POST /menu - abandon the level without completing it
pub async fn return_to_menu(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, session_id) = session_cookie(jar);

    state
        .sessions
        .with_session(&session_id, |session| session.return_to_menu());

    (jar, Redirect::to("/"))
}
