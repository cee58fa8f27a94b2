//! Router construction, shared by the binary and the integration tests.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers;
use crate::paths;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/levels/{level}", post(handlers::select_level))
        .route("/check", post(handlers::check_answer))
        .route("/next", post(handlers::advance))
        .route("/menu", post(handlers::return_to_menu))
        .route("/api/session", get(handlers::session_state))
        .nest_service("/static", ServeDir::new(paths::STATIC_DIR))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
