use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use articles_quiz::{config, content::ExerciseStore, routes, state::AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "articles_quiz=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let exercises_path = config::load_exercises_path();
    let exercises =
        ExerciseStore::load_or_bundled(&exercises_path).expect("Failed to load exercises");

    let full_set = config::LEVEL_COUNT as usize * config::EXERCISES_PER_LEVEL;
    if exercises.len() < full_set {
        tracing::warn!(
            "Only {} of {} exercises available; trailing levels will be short or empty",
            exercises.len(),
            full_set
        );
    }

    let app = routes::app(AppState::new(exercises));

    let bind_addr = config::server_bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

    tracing::info!("Server running on http://localhost:{}", config::server_port());

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
