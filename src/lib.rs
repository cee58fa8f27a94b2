pub mod config;
pub mod content;
pub mod handlers;
pub mod paths;
pub mod quiz;
pub mod routes;
pub mod session;
pub mod state;
