//! EcoHome HTTP API (Axum).
//!
//! Serves assessments for a submitted profile and keeps per-session advisor
//! transcripts in memory.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with default state.
pub fn app() -> Router {
    app_with_state(AppState::new())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::assessment_routes())
        .merge(routes::session_routes())
        .with_state(state)
}
