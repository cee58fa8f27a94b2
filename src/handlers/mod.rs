//! HTTP handlers: the page renderer plus one POST handler per quiz action.

pub mod api;
pub mod quiz;

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::{self, SESSION_COOKIE_NAME};
use crate::content::ExerciseStore;
use crate::quiz::{Level, QuizSession, Screen};
use crate::session::generate_session_id;
use crate::state::AppState;

/// One tile of the level grid.
pub struct LevelTile {
    pub number: u8,
    pub completed: bool,
    /// False when the dataset has no exercises for this level
    pub available: bool,
    pub exercise_count: usize,
}

#[derive(Template)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub tiles: Vec<LevelTile>,
    pub completed_count: usize,
    pub level_count: u8,
    pub per_level: usize,
}

/// Comparison panel shown after checking an answer.
pub struct ReviewPanel {
    pub submitted: String,
    pub answer: String,
    pub rule: String,
}

#[derive(Template)]
#[template(path = "exercise.html")]
pub struct ExerciseTemplate {
    pub level: u8,
    /// One-based position in the page
    pub position: usize,
    pub total: usize,
    pub progress_pct: usize,
    pub prompt: String,
    pub draft: String,
    pub review: Option<ReviewPanel>,
    pub is_last: bool,
}

/// Session ID from the cookie, if the browser already has one.
pub(crate) fn existing_session_id(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE_NAME).map(|c| c.value().to_string())
}

/// Read the session cookie, issuing a fresh one on first visit.
///
/// The cookie has no max-age: it lives as long as the browser session, and
/// the server side expires idle sessions on its own clock.
pub(crate) fn session_cookie(jar: CookieJar) -> (CookieJar, String) {
    if let Some(id) = existing_session_id(&jar) {
        return (jar, id);
    }

    let id = generate_session_id();
    let cookie = Cookie::build((SESSION_COOKIE_NAME, id.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    (jar.add(cookie), id)
}

fn menu_template(session: &QuizSession, store: &ExerciseStore) -> MenuTemplate {
    let tiles = Level::all()
        .map(|level| {
            let exercise_count = store.page(level.number()).len();
            LevelTile {
                number: level.number(),
                completed: session.is_completed(level),
                available: exercise_count > 0,
                exercise_count,
            }
        })
        .collect();

    MenuTemplate {
        tiles,
        completed_count: session.completed_levels().len(),
        level_count: config::LEVEL_COUNT,
        per_level: config::EXERCISES_PER_LEVEL,
    }
}

/// Render whichever screen the session is on.
pub(crate) fn render_screen(session: &mut QuizSession, store: &ExerciseStore) -> String {
    let Screen::InLevel(run) = session.screen() else {
        return menu_template(session, store).render().unwrap_or_default();
    };

    let Some(exercise) = session.current_exercise(store) else {
        // Dataset and session disagree; only possible if the page shrank
        tracing::warn!(
            "No exercise at level {} position {}, returning to menu",
            run.level(),
            run.index()
        );
        session.return_to_menu();
        return menu_template(session, store).render().unwrap_or_default();
    };

    let position = run.index() + 1;
    let template = ExerciseTemplate {
        level: run.level().number(),
        position,
        total: run.page_len(),
        progress_pct: position * 100 / run.page_len().max(1),
        prompt: exercise.prompt.clone(),
        draft: run.draft().to_string(),
        review: run.submitted().map(|submitted| ReviewPanel {
            submitted: submitted.to_string(),
            answer: exercise.answer.clone(),
            rule: exercise.rule.clone(),
        }),
        is_last: run.is_last(),
    };

    template.render().unwrap_or_default()
}

/// GET / - level menu or current exercise
///
/// Visitors without a cookie get a fresh menu; nothing is stored until they
/// perform an action.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let page = match existing_session_id(&jar) {
        Some(session_id) => state
            .sessions
            .with_session(&session_id, |session| render_screen(session, &state.exercises)),
        None => render_screen(&mut QuizSession::new(), &state.exercises),
    };
    Html(page)
}

pub use api::session_state;
pub use quiz::{advance, check_answer, return_to_menu, select_level};
