//! Application configuration constants.
//!
//! This module centralizes configurable values so handlers and the quiz
//! state machine never hardcode them.

use serde::Deserialize;
use std::path::PathBuf;

use crate::paths;

// ==================== Dataset Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    exercises: Option<ExercisesConfig>,
}

#[derive(Debug, Deserialize)]
struct ExercisesConfig {
    path: Option<String>,
}

/// Path from a config.toml body, if it names one.
fn exercises_path_from_toml(contents: &str) -> Option<PathBuf> {
    let config = toml::from_str::<AppConfig>(contents).ok()?;
    config.exercises?.path.map(PathBuf::from)
}

/// Load exercise dataset path with priority: config.toml > .env > default
pub fn load_exercises_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Some(path) = exercises_path_from_toml(&contents) {
            tracing::info!("Using exercises from config.toml: {}", path.display());
            return path;
        }
    }

    // Priority 2: .env EXERCISES_PATH
    if let Ok(path) = std::env::var("EXERCISES_PATH") {
        tracing::info!("Using exercises from EXERCISES_PATH env: {}", path);
        return PathBuf::from(path);
    }

    let default = PathBuf::from(paths::exercises_path());
    tracing::info!("Using default exercises path: {}", default.display());
    default
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Default server port
pub const SERVER_PORT: u16 = 3000;

/// Server port, overridable with the PORT env var
pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(SERVER_PORT)
}

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, server_port())
}

// ==================== Session Configuration ====================

/// Name of the cookie carrying the quiz session ID
pub const SESSION_COOKIE_NAME: &str = "quiz_session";

/// Session expiration time in hours
pub const SESSION_EXPIRY_HOURS: i64 = 12;

/// Probability threshold for session cleanup (0-255, lower = less frequent)
/// Value of 25 means ~10% chance (25/256) on each session access
pub const SESSION_CLEANUP_THRESHOLD: u8 = 25;

// ==================== Quiz Configuration ====================

/// Number of selectable levels
pub const LEVEL_COUNT: u8 = 10;

/// Exercises per level page
pub const EXERCISES_PER_LEVEL: usize = 20;
