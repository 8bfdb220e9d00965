use crate::error::{TodoError, TodoResult};
use crate::models::{Todo, TodoFilter};
use crate::repository::TodoRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

/// In-memory todo repository.
///
/// Backs tests and local development; keeps todos in insertion order,
/// matching the contract of the MongoDB implementation.
#[derive(Debug, Default)]
pub struct MemoryTodoRepository {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for MemoryTodoRepository {
    async fn insert(&self, todo: &Todo) -> TodoResult<()> {
        todo.validate()
            .map_err(|err| TodoError::Validation(err.to_string()))?;

        self.todos.write().await.push(todo.clone());
        Ok(())
    }

    async fn list(&self, filter: TodoFilter) -> TodoResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos
            .iter()
            .filter(|todo| filter.date.as_deref().is_none_or(|date| todo.date == date))
            .cloned()
            .collect())
    }

    async fn set_completed(&self, id: Uuid, completed: bool) -> TodoResult<Option<Todo>> {
        let mut todos = self.todos.write().await;
        match todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.set_completed(completed);
                Ok(Some(todo.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: Uuid) -> TodoResult<Option<Todo>> {
        let mut todos = self.todos.write().await;
        match todos.iter().position(|todo| todo.id == id) {
            Some(index) => Ok(Some(todos.remove(index))),
            None => Ok(None),
        }
    }
}
