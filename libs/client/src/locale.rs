use domain_todos::Priority;

/// The client operation that a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientAction {
    Fetch,
    Create,
    Update,
    Delete,
}

/// UI language. The original interface shipped in Indonesian; English is
/// provided alongside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Id,
    En,
}

impl Locale {
    /// Notification shown when an operation fails, naming the failed action.
    pub fn action_failed(&self, action: ClientAction) -> &'static str {
        match (self, action) {
            (Locale::Id, ClientAction::Fetch) => "Gagal mengambil data todos",
            (Locale::Id, ClientAction::Create) => "Gagal menambah todo",
            (Locale::Id, ClientAction::Update) => "Gagal mengubah status todo",
            (Locale::Id, ClientAction::Delete) => "Gagal menghapus todo",
            (Locale::En, ClientAction::Fetch) => "Failed to fetch todos",
            (Locale::En, ClientAction::Create) => "Failed to add todo",
            (Locale::En, ClientAction::Update) => "Failed to update todo status",
            (Locale::En, ClientAction::Delete) => "Failed to delete todo",
        }
    }

    /// Completion summary line for the selected day.
    pub fn summary(&self, completed: usize, total: usize) -> String {
        match self {
            Locale::Id => format!("Selesai: {completed} dari {total} tugas untuk hari ini"),
            Locale::En => format!("Done: {completed} of {total} tasks for this day"),
        }
    }

    /// List header for the selected date. Dates are rendered verbatim.
    pub fn header(&self, date: &str) -> String {
        match self {
            Locale::Id => format!("Tugas untuk {date}"),
            Locale::En => format!("Tasks for {date}"),
        }
    }

    pub fn priority_label(&self, priority: Priority) -> &'static str {
        match (self, priority) {
            (Locale::Id, Priority::High) => "Prioritas Tinggi",
            (Locale::Id, Priority::Medium) => "Prioritas Sedang",
            (Locale::Id, Priority::Low) => "Prioritas Rendah",
            (Locale::En, Priority::High) => "High Priority",
            (Locale::En, Priority::Medium) => "Medium Priority",
            (Locale::En, Priority::Low) => "Low Priority",
        }
    }
}
