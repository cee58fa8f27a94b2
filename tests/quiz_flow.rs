//! HTTP-level tests for the quiz flow.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

use articles_quiz::content::{Exercise, ExerciseStore};
use articles_quiz::routes;
use articles_quiz::state::AppState;

fn store(count: u32) -> ExerciseStore {
    let exercises = (1..=count)
        .map(|id| Exercise {
            id,
            prompt: format!("Phrase {} : ___ chat.", id),
            answer: format!("le{}", id),
            rule: format!("Règle {}", id),
        })
        .collect();
    ExerciseStore::from_exercises(exercises).unwrap()
}

fn server(count: u32) -> TestServer {
    TestServer::builder()
        .save_cookies()
        .build(routes::app(AppState::new(store(count))))
        .unwrap()
}

async fn session(server: &TestServer) -> Value {
    server.get("/api/session").await.json::<Value>()
}

async fn answer_and_advance(server: &TestServer, answer: &str) {
    server
        .post("/check")
        .form(&[("answer", answer)])
        .await
        .assert_status(StatusCode::SEE_OTHER);
    server.post("/next").await.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_menu_is_initial_screen() {
    let server = server(200);

    let response = server.get("/").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Prêt à pratiquer"));
    assert!(html.contains("/levels/1\""));

    let state = session(&server).await;
    assert_eq!(state["screen"], "menu");
    assert_eq!(state["level"], Value::Null);
}

#[tokio::test]
async fn test_select_level_shows_first_exercise() {
    let server = server(200);

    server.post("/levels/3").await.assert_status(StatusCode::SEE_OTHER);

    let html = server.get("/").await.text();
    assert!(html.contains("Phrase 41"));
    assert!(html.contains("Exercice 1 / 20"));
    assert!(html.contains("Retour au menu"));

    let state = session(&server).await;
    assert_eq!(state["screen"], "answering");
    assert_eq!(state["level"], 3);
    assert_eq!(state["position"], 1);
    assert_eq!(state["draft"], "");
}

#[tokio::test]
async fn test_check_shows_review_panel() {
    let server = server(200);
    server.post("/levels/1").await;

    server.post("/check").form(&[("answer", "la")]).await;

    let html = server.get("/").await.text();
    assert!(html.contains(r#"data-testid="submitted">la</p>"#));
    assert!(html.contains(r#"data-testid="answer">le1</p>"#));
    assert!(html.contains("Règle 1"));

    let state = session(&server).await;
    assert_eq!(state["screen"], "reviewing");
    assert_eq!(state["submitted"], "la");
}

#[tokio::test]
async fn test_empty_answer_renders_placeholder() {
    let server = server(200);
    server.post("/levels/5").await;

    server.post("/check").form(&[("answer", "")]).await;

    let html = server.get("/").await.text();
    assert!(html.contains("(vide)"));
    assert_eq!(session(&server).await["submitted"], "");
}

#[tokio::test]
async fn test_complete_level_returns_to_menu() {
    let server = server(200);
    server.post("/levels/3").await;

    for _ in 0..20 {
        answer_and_advance(&server, "le").await;
    }

    let state = session(&server).await;
    assert_eq!(state["screen"], "menu");
    assert_eq!(state["completed_levels"], serde_json::json!([3]));

    let html = server.get("/").await.text();
    assert!(html.contains("Complété !"));
}

#[tokio::test]
async fn test_return_to_menu_does_not_complete() {
    let server = server(200);
    server.post("/levels/2").await;
    answer_and_advance(&server, "un").await;

    server.post("/menu").await.assert_status(StatusCode::SEE_OTHER);

    let state = session(&server).await;
    assert_eq!(state["screen"], "menu");
    assert_eq!(state["completed_levels"], serde_json::json!([]));
}

#[tokio::test]
async fn test_short_dataset_completes_level() {
    let server = server(15);
    server.post("/levels/1").await;

    for _ in 0..14 {
        answer_and_advance(&server, "").await;
    }
    let html = server.get("/").await.text();
    assert!(html.contains("Exercice 15 / 15"));

    answer_and_advance(&server, "").await;
    let state = session(&server).await;
    assert_eq!(state["screen"], "menu");
    assert_eq!(state["completed_levels"], serde_json::json!([1]));
}

#[tokio::test]
async fn test_empty_level_cannot_be_selected() {
    let server = server(15);

    server.post("/levels/2").await;

    assert_eq!(session(&server).await["screen"], "menu");
    assert!(server.get("/").await.text().contains("Bientôt"));
}

#[tokio::test]
async fn test_invalid_level_redirects_to_menu() {
    let server = server(200);

    for level in ["0", "11", "abc"] {
        server
            .post(&format!("/levels/{}", level))
            .await
            .assert_status(StatusCode::SEE_OTHER);
    }

    assert_eq!(session(&server).await["screen"], "menu");
}

#[tokio::test]
async fn test_next_without_check_is_ignored() {
    let server = server(200);
    server.post("/levels/1").await;

    server.post("/next").await;

    let state = session(&server).await;
    assert_eq!(state["screen"], "answering");
    assert_eq!(state["position"], 1);
}

#[tokio::test]
async fn test_cookieless_reads_store_nothing() {
    let state = AppState::new(store(200));
    let server = TestServer::new(routes::app(state.clone())).unwrap();

    let page = server.get("/").await;
    page.assert_status_ok();
    assert!(page.text().contains("Prêt à pratiquer"));
    assert!(page.maybe_cookie("quiz_session").is_none());

    let api = server.get("/api/session").await;
    assert_eq!(api.json::<Value>()["screen"], "menu");
    assert!(api.maybe_cookie("quiz_session").is_none());

    assert!(state.sessions.is_empty());
}

#[tokio::test]
async fn test_first_action_issues_browser_session_cookie() {
    let state = AppState::new(store(200));
    let server = TestServer::new(routes::app(state.clone())).unwrap();

    let response = server.post("/levels/1").await;
    response.assert_status(StatusCode::SEE_OTHER);

    let cookie = response.cookie("quiz_session");
    assert!(cookie.max_age().is_none());
    assert!(cookie.expires().is_none());
    assert_eq!(state.sessions.len(), 1);
}
