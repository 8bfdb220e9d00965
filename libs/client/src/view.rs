use domain_todos::{Priority, Todo};
use uuid::Uuid;

/// Completion counts for the selected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub completed: usize,
    pub total: usize,
}

/// The client's local cache of todos for one selected date.
///
/// Owned value object: rebuilt on date selection, patched in place on
/// mutations. Holds the todos in display order.
#[derive(Debug, Clone)]
pub struct DayView {
    selected_date: String,
    selected_priority: Priority,
    todos: Vec<Todo>,
}

impl DayView {
    pub fn new(selected_date: impl Into<String>) -> Self {
        Self {
            selected_date: selected_date.into(),
            selected_priority: Priority::Medium,
            todos: Vec::new(),
        }
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn selected_priority(&self) -> Priority {
        self.selected_priority
    }

    /// Priority used for subsequently submitted todos.
    pub fn select_priority(&mut self, priority: Priority) {
        self.selected_priority = priority;
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: Uuid) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Replaces the whole collection, applying the client's own stable
    /// priority sort. Server order is not trusted.
    pub fn replace(&mut self, mut todos: Vec<Todo>) {
        todos.sort_by_key(|todo| todo.priority);
        self.todos = todos;
    }

    /// Appends at the end without re-sorting. A freshly created todo sits
    /// after existing ones regardless of priority until the next refetch.
    pub fn append(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Replaces the entry with the same id in place. The row keeps its
    /// position.
    pub fn update(&mut self, updated: Todo) {
        if let Some(existing) = self.todos.iter_mut().find(|todo| todo.id == updated.id) {
            *existing = updated;
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Todo> {
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        Some(self.todos.remove(index))
    }

    /// Counts completion among todos whose date matches the selected date.
    pub fn summary(&self) -> Summary {
        let on_day = self
            .todos
            .iter()
            .filter(|todo| todo.date == self.selected_date);

        let mut completed = 0;
        let mut total = 0;
        for todo in on_day {
            total += 1;
            if todo.completed {
                completed += 1;
            }
        }
        Summary { completed, total }
    }
}
