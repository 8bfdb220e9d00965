//! API routes module
//!
//! Wires the todos domain and readiness checks into the HTTP surface.
//! Routes are served from the root, so the client sees `/todos` directly.

pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/todos", todos::router(state))
        .merge(health::router(state.clone()))
}
