//! Todos Domain
//!
//! This module provides a complete domain implementation for a single-user
//! daily todo list backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, priority ordering
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB and in-memory impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{
//!     handlers,
//!     mongodb::MongoTodoRepository,
//!     service::TodoService,
//! };
//! use mongodb::Client;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a MongoDB client
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("todos");
//!
//! // Create a repository and service
//! let repository = MongoTodoRepository::new(&db);
//! repository.init_indexes().await?;
//! let service = TodoService::new(Arc::new(repository));
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TodoError, TodoResult};
pub use handlers::ApiDoc;
pub use memory::MemoryTodoRepository;
pub use models::{CreateTodo, DeletedTodo, Priority, Todo, TodoFilter, UpdateTodo};
pub use mongodb::MongoTodoRepository;
pub use repository::TodoRepository;
pub use service::TodoService;
