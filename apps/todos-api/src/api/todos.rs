//! Todos API routes
//!
//! Wires the todos domain to HTTP routes, including index creation.

use axum::Router;
use domain_todos::{MongoTodoRepository, TodoResult, TodoService, handlers};
use mongodb::Database;
use std::sync::Arc;

use crate::state::AppState;

/// Ensure the todos collection indexes exist. Called once at startup.
pub async fn init_indexes(db: &Database) -> TodoResult<()> {
    MongoTodoRepository::new(db).init_indexes().await
}

/// Create the todos router backed by MongoDB
pub fn router(state: &AppState) -> Router {
    let repository = Arc::new(MongoTodoRepository::new(&state.db));
    let service = TodoService::new(repository);

    handlers::router(service)
}
