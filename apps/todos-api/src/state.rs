//! Application state management.
//!
//! Shared state passed to request handlers: configuration plus the
//! MongoDB client and database handle.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is cheap; the MongoDB client shares its underlying
/// connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client
    pub mongo_client: Client,
    /// Handle to the todos database
    pub db: Database,
}
