use crate::error::ClientError;
use crate::locale::{ClientAction, Locale};
use crate::render::{render, render_row, render_summary, ListRender, RowRender};
use crate::transport::TodoTransport;
use crate::view::DayView;
use domain_todos::{CreateTodo, Priority};
use uuid::Uuid;

/// Incremental update to an already-rendered list.
///
/// Mutations touch one row plus the summary; only a date change replaces
/// the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPatch {
    /// Replace the entire list.
    Replace(ListRender),
    /// Append a row at the end.
    Append { row: RowRender, summary: String },
    /// Update one row in place.
    Row { row: RowRender, summary: String },
    /// Remove one row.
    Remove { id: Uuid, summary: String },
}

/// Client session tying a transport to the local day view.
///
/// Each operation issues one network call. On failure the view is left
/// untouched and the error carries a localized notification. Nothing
/// guards against overlapping calls; the last response to land wins.
pub struct TodoSession<T: TodoTransport> {
    transport: T,
    view: DayView,
    locale: Locale,
}

impl<T: TodoTransport> TodoSession<T> {
    pub fn new(transport: T, selected_date: impl Into<String>, locale: Locale) -> Self {
        Self {
            transport,
            view: DayView::new(selected_date),
            locale,
        }
    }

    pub fn view(&self) -> &DayView {
        &self.view
    }

    /// Priority applied to subsequently submitted todos.
    pub fn select_priority(&mut self, priority: Priority) {
        self.view.select_priority(priority);
    }

    /// Switches to another day: refetches, replaces the collection and
    /// re-renders the full list under the client's own priority sort.
    pub async fn select_date(&mut self, date: &str) -> Result<ListPatch, ClientError> {
        let todos = self
            .transport
            .list(date)
            .await
            .map_err(|err| ClientError::new(ClientAction::Fetch, err))?;

        let mut view = DayView::new(date);
        view.select_priority(self.view.selected_priority());
        view.replace(todos);
        self.view = view;

        Ok(ListPatch::Replace(render(&self.view, &self.locale)))
    }

    /// Submits a new todo for the selected date with the selected
    /// priority. Blank text is a no-op.
    ///
    /// The created todo is appended at the end of the list without
    /// re-sorting; it keeps that position until the next date select.
    pub async fn submit(&mut self, text: &str) -> Result<Option<ListPatch>, ClientError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let input = CreateTodo {
            text: text.to_string(),
            date: self.view.selected_date().to_string(),
            priority: self.view.selected_priority(),
        };
        let todo = self
            .transport
            .create(input)
            .await
            .map_err(|err| ClientError::new(ClientAction::Create, err))?;

        let row = render_row(&todo, &self.locale);
        self.view.append(todo);
        Ok(Some(ListPatch::Append {
            row,
            summary: render_summary(&self.view, &self.locale),
        }))
    }

    /// Flips the completion state of a locally known todo. Unknown ids
    /// are a no-op. The row is updated in place and never moves.
    pub async fn toggle(&mut self, id: Uuid) -> Result<Option<ListPatch>, ClientError> {
        let Some(current) = self.view.get(id) else {
            return Ok(None);
        };
        let target = !current.completed;

        let updated = self
            .transport
            .update(id, target)
            .await
            .map_err(|err| ClientError::new(ClientAction::Update, err))?;

        let row = render_row(&updated, &self.locale);
        self.view.update(updated);
        Ok(Some(ListPatch::Row {
            row,
            summary: render_summary(&self.view, &self.locale),
        }))
    }

    /// Deletes a todo and drops its row.
    pub async fn delete(&mut self, id: Uuid) -> Result<ListPatch, ClientError> {
        self.transport
            .delete(id)
            .await
            .map_err(|err| ClientError::new(ClientAction::Delete, err))?;

        self.view.remove(id);
        Ok(ListPatch::Remove {
            id,
            summary: render_summary(&self.view, &self.locale),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockTodoTransport, TransportError};
    use domain_todos::Todo;
    use mockall::predicate::eq;

    fn todo(text: &str, date: &str, priority: Priority) -> Todo {
        Todo::new(CreateTodo {
            text: text.to_string(),
            date: date.to_string(),
            priority,
        })
    }

    fn status_error(status: u16) -> TransportError {
        TransportError::Status {
            status,
            message: "error".to_string(),
        }
    }

    #[tokio::test]
    async fn select_date_replaces_view_with_sorted_todos() {
        let mut transport = MockTodoTransport::new();
        let low = todo("low", "2024-06-01", Priority::Low);
        let high = todo("high", "2024-06-01", Priority::High);
        let response = vec![low.clone(), high.clone()];
        transport
            .expect_list()
            .withf(|date| date == "2024-06-01")
            .return_once(move |_| Ok(response));

        let mut session = TodoSession::new(transport, "2024-05-31", Locale::Id);
        let patch = session.select_date("2024-06-01").await.unwrap();

        let ListPatch::Replace(rendered) = patch else {
            panic!("expected a full replace");
        };
        let texts: Vec<_> = rendered.rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["high", "low"]);
        assert_eq!(session.view().selected_date(), "2024-06-01");
    }

    #[tokio::test]
    async fn submit_blank_text_is_a_no_op() {
        let mut transport = MockTodoTransport::new();
        transport.expect_create().times(0);

        let mut session = TodoSession::new(transport, "2024-06-01", Locale::Id);
        let patch = session.submit("   ").await.unwrap();

        assert!(patch.is_none());
        assert!(session.view().todos().is_empty());
    }

    #[tokio::test]
    async fn submit_appends_at_the_end_without_resorting() {
        let mut transport = MockTodoTransport::new();
        let existing = todo("medium", "2024-06-01", Priority::Medium);
        let response = vec![existing.clone()];
        transport.expect_list().return_once(move |_| Ok(response));
        let created = todo("high later", "2024-06-01", Priority::High);
        let created_clone = created.clone();
        transport
            .expect_create()
            .withf(|input| input.text == "high later" && input.priority == Priority::High)
            .return_once(move |_| Ok(created_clone));

        let mut session = TodoSession::new(transport, "2024-06-01", Locale::Id);
        session.select_date("2024-06-01").await.unwrap();
        session.select_priority(Priority::High);

        let patch = session.submit("high later").await.unwrap().unwrap();

        let ListPatch::Append { row, summary } = patch else {
            panic!("expected an append patch");
        };
        assert_eq!(row.id, created.id);
        assert_eq!(summary, "Selesai: 0 dari 2 tugas untuk hari ini");

        // Appended last even though its priority sorts first.
        let texts: Vec<_> = session
            .view()
            .todos()
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(texts, vec!["medium", "high later"]);
    }

    #[tokio::test]
    async fn toggle_negates_the_local_completed_flag() {
        let mut transport = MockTodoTransport::new();
        let existing = todo("task", "2024-06-01", Priority::Medium);
        let id = existing.id;
        let response = vec![existing.clone()];
        transport.expect_list().return_once(move |_| Ok(response));

        let mut updated = existing.clone();
        updated.completed = true;
        transport
            .expect_update()
            .with(eq(id), eq(true))
            .return_once(move |_, _| Ok(updated));

        let mut session = TodoSession::new(transport, "2024-06-01", Locale::Id);
        session.select_date("2024-06-01").await.unwrap();

        let patch = session.toggle(id).await.unwrap().unwrap();
        let ListPatch::Row { row, summary } = patch else {
            panic!("expected a row patch");
        };
        assert!(row.completed);
        assert_eq!(summary, "Selesai: 1 dari 1 tugas untuk hari ini");
    }

    #[tokio::test]
    async fn toggle_unknown_local_id_is_a_no_op() {
        let mut transport = MockTodoTransport::new();
        transport.expect_update().times(0);

        let mut session = TodoSession::new(transport, "2024-06-01", Locale::Id);
        let patch = session.toggle(Uuid::now_v7()).await.unwrap();
        assert!(patch.is_none());
    }

    #[tokio::test]
    async fn delete_drops_the_entry_and_its_row() {
        let mut transport = MockTodoTransport::new();
        let existing = todo("gone", "2024-06-01", Priority::Low);
        let id = existing.id;
        let response = vec![existing.clone()];
        transport.expect_list().return_once(move |_| Ok(response));
        transport
            .expect_delete()
            .with(eq(id))
            .return_once(move |_| Ok(existing));

        let mut session = TodoSession::new(transport, "2024-06-01", Locale::Id);
        session.select_date("2024-06-01").await.unwrap();

        let patch = session.delete(id).await.unwrap();
        assert_eq!(
            patch,
            ListPatch::Remove {
                id,
                summary: "Selesai: 0 dari 0 tugas untuk hari ini".to_string()
            }
        );
        assert!(session.view().todos().is_empty());
    }

    #[tokio::test]
    async fn failed_create_leaves_local_state_unchanged() {
        let mut transport = MockTodoTransport::new();
        let existing = todo("kept", "2024-06-01", Priority::Medium);
        let response = vec![existing.clone()];
        transport.expect_list().return_once(move |_| Ok(response));
        transport
            .expect_create()
            .return_once(|_| Err(status_error(500)));

        let mut session = TodoSession::new(transport, "2024-06-01", Locale::Id);
        session.select_date("2024-06-01").await.unwrap();

        let error = session.submit("doomed").await.unwrap_err();
        assert_eq!(error.user_message(&Locale::Id), "Gagal menambah todo");
        assert_eq!(session.view().todos().len(), 1);
        assert_eq!(session.view().todos()[0].text, "kept");
    }

    #[tokio::test]
    async fn failed_toggle_leaves_local_state_unchanged() {
        let mut transport = MockTodoTransport::new();
        let existing = todo("kept", "2024-06-01", Priority::Medium);
        let id = existing.id;
        let response = vec![existing.clone()];
        transport.expect_list().return_once(move |_| Ok(response));
        transport
            .expect_update()
            .return_once(|_, _| Err(status_error(404)));

        let mut session = TodoSession::new(transport, "2024-06-01", Locale::Id);
        session.select_date("2024-06-01").await.unwrap();

        let error = session.toggle(id).await.unwrap_err();
        assert_eq!(error.user_message(&Locale::Id), "Gagal mengubah status todo");
        assert!(!session.view().todos()[0].completed);
    }
}
