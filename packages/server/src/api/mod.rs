use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use namecraft_generator::NameGenerator;

pub mod health;
pub mod names;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<NameGenerator>,
}

/// Creates the names API router (nested under /api/names)
pub fn create_names_router() -> Router<AppState> {
    Router::new()
        .route("/options", get(names::get_options))
        .route("/state", get(names::get_state))
        .route("/generate", post(names::generate_names))
        .route("/regenerate", post(names::regenerate_names))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .nest("/api/names", create_names_router())
        .with_state(state)
}
