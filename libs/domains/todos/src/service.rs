use crate::error::{TodoError, TodoResult};
use crate::models::{CreateTodo, Todo, TodoFilter, DATE_FORMAT, INVALID_DATE_MESSAGE};
use crate::repository::TodoRepository;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

/// Business logic for todos.
///
/// The service validates input, applies the priority ordering and maps
/// missing rows to not-found errors; storage details stay behind the
/// repository trait.
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> Clone for TodoService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists todos, optionally restricted to one day, ordered by priority.
    ///
    /// The sort is stable, so todos sharing a priority keep their
    /// insertion order.
    #[instrument(skip(self))]
    pub async fn list_todos(&self, filter: TodoFilter) -> TodoResult<Vec<Todo>> {
        if let Some(date) = &filter.date {
            if !DATE_FORMAT.is_match(date) {
                return Err(TodoError::Validation(INVALID_DATE_MESSAGE.to_string()));
            }
        }

        let mut todos = self.repository.list(filter).await?;
        todos.sort_by_key(|todo| todo.priority);
        Ok(todos)
    }

    #[instrument(skip(self, input))]
    pub async fn create_todo(&self, input: CreateTodo) -> TodoResult<Todo> {
        input
            .validate()
            .map_err(|err| TodoError::Validation(err.to_string()))?;

        let todo = Todo::new(input);
        self.repository.insert(&todo).await?;
        Ok(todo)
    }

    #[instrument(skip(self))]
    pub async fn set_completed(&self, id: Uuid, completed: bool) -> TodoResult<Todo> {
        self.repository
            .set_completed(id, completed)
            .await?
            .ok_or(TodoError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_todo(&self, id: Uuid) -> TodoResult<Todo> {
        self.repository
            .remove(id)
            .await?
            .ok_or(TodoError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTodoRepository;
    use crate::models::Priority;
    use crate::repository::MockTodoRepository;
    use serde_json::json;

    fn service() -> TodoService<MemoryTodoRepository> {
        TodoService::new(Arc::new(MemoryTodoRepository::new()))
    }

    fn input(text: &str, date: &str, priority: Priority) -> CreateTodo {
        CreateTodo {
            text: text.to_string(),
            date: date.to_string(),
            priority,
        }
    }

    #[tokio::test]
    async fn created_todo_appears_exactly_once_in_listing() {
        let service = service();
        let created = service
            .create_todo(input("Buy groceries", "2024-06-01", Priority::High))
            .await
            .unwrap();

        let todos = service.list_todos(TodoFilter::default()).await.unwrap();
        assert_eq!(todos.iter().filter(|t| t.id == created.id).count(), 1);
    }

    #[tokio::test]
    async fn listing_sorts_by_priority_with_stable_ties() {
        let service = service();
        let low = service
            .create_todo(input("low", "2024-06-01", Priority::Low))
            .await
            .unwrap();
        let first_high = service
            .create_todo(input("high 1", "2024-06-01", Priority::High))
            .await
            .unwrap();
        let medium = service
            .create_todo(input("medium", "2024-06-01", Priority::Medium))
            .await
            .unwrap();
        let second_high = service
            .create_todo(input("high 2", "2024-06-01", Priority::High))
            .await
            .unwrap();

        let ids: Vec<_> = service
            .list_todos(TodoFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();

        assert_eq!(ids, vec![first_high.id, second_high.id, medium.id, low.id]);
    }

    #[tokio::test]
    async fn listing_rejects_malformed_date_filter() {
        let service = service();
        let result = service
            .list_todos(TodoFilter {
                date: Some("06-01-2024".to_string()),
            })
            .await;

        assert!(matches!(result, Err(TodoError::Validation(_))));
    }

    #[tokio::test]
    async fn create_rejects_blank_text() {
        let service = service();
        let result = service
            .create_todo(input("   ", "2024-06-01", Priority::High))
            .await;

        assert!(matches!(result, Err(TodoError::Validation(_))));
        assert!(service
            .list_todos(TodoFilter::default())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn create_normalizes_priority_casing_from_json() {
        let service = service();
        let input: CreateTodo = serde_json::from_value(json!({
            "text": "Buy groceries",
            "date": "2024-06-01",
            "priority": "HIGH"
        }))
        .unwrap();

        let created = service.create_todo(input).await.unwrap();
        assert_eq!(created.priority, Priority::High);
        assert!(!created.completed);
    }

    #[tokio::test]
    async fn set_completed_is_idempotent() {
        let service = service();
        let created = service
            .create_todo(input("Buy groceries", "2024-06-01", Priority::High))
            .await
            .unwrap();

        let once = service.set_completed(created.id, true).await.unwrap();
        let twice = service.set_completed(created.id, true).await.unwrap();
        assert!(once.completed);
        assert!(twice.completed);

        let reverted = service.set_completed(created.id, false).await.unwrap();
        assert!(!reverted.completed);
    }

    #[tokio::test]
    async fn set_completed_on_unknown_id_is_not_found() {
        let service = service();
        let result = service.set_completed(Uuid::now_v7(), true).await;
        assert!(matches!(result, Err(TodoError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_the_todo_and_second_delete_fails() {
        let service = service();
        let created = service
            .create_todo(input("Buy groceries", "2024-06-01", Priority::High))
            .await
            .unwrap();

        let deleted = service.delete_todo(created.id).await.unwrap();
        assert_eq!(deleted.id, created.id);

        let again = service.delete_todo(created.id).await;
        assert!(matches!(again, Err(TodoError::NotFound(_))));

        assert!(service
            .list_todos(TodoFilter::default())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn repository_errors_bubble_up_from_listing() {
        let mut repository = MockTodoRepository::new();
        repository
            .expect_list()
            .returning(|_| Err(TodoError::Database("connection reset".to_string())));

        let service = TodoService::new(Arc::new(repository));
        let result = service.list_todos(TodoFilter::default()).await;
        assert!(matches!(result, Err(TodoError::Database(_))));
    }
}
