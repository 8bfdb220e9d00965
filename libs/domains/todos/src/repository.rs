use crate::error::TodoResult;
use crate::models::{Todo, TodoFilter};
use async_trait::async_trait;
use uuid::Uuid;

/// Storage abstraction for todos.
///
/// Implementations must return listed todos in insertion order; the
/// service layer is responsible for priority ordering.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persists a new todo.
    async fn insert(&self, todo: &Todo) -> TodoResult<()>;

    /// Returns todos matching the filter, oldest first.
    async fn list(&self, filter: TodoFilter) -> TodoResult<Vec<Todo>>;

    /// Sets the completion flag, returning the updated todo if it exists.
    async fn set_completed(&self, id: Uuid, completed: bool) -> TodoResult<Option<Todo>>;

    /// Removes a todo, returning its final state if it existed.
    async fn remove(&self, id: Uuid) -> TodoResult<Option<Todo>>;
}
