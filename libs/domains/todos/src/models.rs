use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Calendar dates travel as plain `YYYY-MM-DD` strings. Only the shape is
/// checked, matching what browser date inputs submit.
pub static DATE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date format regex is valid"));

pub const INVALID_DATE_MESSAGE: &str = "Invalid date format. Please use YYYY-MM-DD";
pub const TEXT_REQUIRED_MESSAGE: &str = "Todo text is required";
pub const INVALID_PRIORITY_MESSAGE: &str = "Priority must be either 'high', 'medium', or 'low'";

/// Urgency level of a todo.
///
/// Variant order defines display order: sorting by `Priority` puts high
/// before medium before low.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Priority {
    High,
    Medium,
    Low,
}

// Accepts any casing on input ("HIGH", "High", "high") but always stores
// and emits lowercase.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Priority::from_str(&raw).map_err(|_| de::Error::custom(INVALID_PRIORITY_MESSAGE))
    }
}

/// A single todo item as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    #[validate(custom(function = not_blank, message = "Todo text is required"))]
    pub text: String,
    #[validate(regex(path = *DATE_FORMAT, message = "Invalid date format. Please use YYYY-MM-DD"))]
    pub date: String,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Builds a fresh todo from validated input. Text is stored trimmed and
    /// new todos always start uncompleted.
    pub fn new(input: CreateTodo) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            text: input.text.trim().to_string(),
            date: input.date,
            priority: input.priority,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a todo.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTodo {
    #[validate(custom(function = not_blank, message = "Todo text is required"))]
    #[schema(example = "Buy groceries")]
    pub text: String,
    #[validate(regex(path = *DATE_FORMAT, message = "Invalid date format. Please use YYYY-MM-DD"))]
    #[schema(example = "2024-06-01")]
    pub date: String,
    pub priority: Priority,
}

/// Payload for toggling a todo's completion flag. The flag is set
/// absolutely rather than flipped, so retries are idempotent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTodo {
    pub completed: bool,
}

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct TodoFilter {
    /// Restrict results to a single day (`YYYY-MM-DD`).
    pub date: Option<String>,
}

/// Response body returned after a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedTodo {
    #[schema(example = "Todo deleted successfully")]
    pub message: String,
    pub todo: Todo,
}

impl DeletedTodo {
    pub fn new(todo: Todo) -> Self {
        Self {
            message: "Todo deleted successfully".to_string(),
            todo,
        }
    }
}

fn not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        Err(ValidationError::new("required"))
    } else {
        Ok(())
    }
}
