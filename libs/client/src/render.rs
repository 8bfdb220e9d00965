use crate::locale::Locale;
use crate::view::DayView;
use domain_todos::Todo;
use uuid::Uuid;

/// Description of one rendered todo row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRender {
    pub id: Uuid,
    pub text: String,
    pub priority_label: &'static str,
    pub completed: bool,
}

/// Full render description of the list: header, rows in display order and
/// the completion summary. Applying this to a concrete UI is left to a
/// separate reconciler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRender {
    pub header: String,
    pub rows: Vec<RowRender>,
    pub summary: String,
}

pub fn render_row(todo: &Todo, locale: &Locale) -> RowRender {
    RowRender {
        id: todo.id,
        text: todo.text.clone(),
        priority_label: locale.priority_label(todo.priority),
        completed: todo.completed,
    }
}

pub fn render_summary(view: &DayView, locale: &Locale) -> String {
    let summary = view.summary();
    locale.summary(summary.completed, summary.total)
}

/// Pure view-to-render mapping. Rows come out in the view's display order.
pub fn render(view: &DayView, locale: &Locale) -> ListRender {
    ListRender {
        header: locale.header(view.selected_date()),
        rows: view
            .todos()
            .iter()
            .map(|todo| render_row(todo, locale))
            .collect(),
        summary: render_summary(view, locale),
    }
}
