use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

pub type TodoResult<T> = Result<T, TodoError>;

/// Errors produced by the todos domain.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Todo not found: {0}")]
    NotFound(Uuid),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<mongodb::error::Error> for TodoError {
    fn from(err: mongodb::error::Error) -> Self {
        TodoError::Database(err.to_string())
    }
}

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(_) => AppError::NotFound("Todo not found".to_string()),
            TodoError::Validation(message) => AppError::BadRequest(message),
            TodoError::Database(message) => AppError::InternalServerError(message),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
