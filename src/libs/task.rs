//! Task records and the vocabulary used to select and order them.

use super::error::{SortError, TaskError};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(TaskError::InvalidStatus(other.to_string())),
        }
    }
}

/// A single to-do item as stored in the database.
///
/// `title` is required when a task is created, but records read back from
/// storage are not trusted to carry one, so it is optional here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    /// Serialized as `YYYY-MM-DD HH:MM:SS`.
    #[serde(default, with = "created_at_format")]
    pub created_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn new(id: i64, title: &str) -> Self {
        Task {
            id,
            title: Some(title.to_string()),
            description: None,
            status: TaskStatus::Pending,
            due_date: None,
            created_at: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn with_created_at(mut self, created_at: Option<NaiveDateTime>) -> Self {
        self.created_at = created_at;
        self
    }

    /// A pending task whose due date lies strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == TaskStatus::Pending && self.due_date.is_some_and(|due| due < today)
    }
}

/// Field used to order a task listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[value(name = "id")]
    Id,
    #[value(name = "title")]
    Title,
    #[value(name = "status")]
    Status,
    #[default]
    #[value(name = "due_date")]
    DueDate,
    #[value(name = "created_at")]
    CreatedAt,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [SortKey::Id, SortKey::Title, SortKey::Status, SortKey::DueDate, SortKey::CreatedAt];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Title => "title",
            SortKey::Status => "status",
            SortKey::DueDate => "due_date",
            SortKey::CreatedAt => "created_at",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SortError::InvalidSortKey(s.to_string()))
    }
}

/// Row selection applied by the store before any ordering happens.
#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Status(TaskStatus),
    ByIds(Vec<i64>),
}

/// Fields supplied when a task is created.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: &str, description: Option<&str>, due_date: Option<NaiveDate>) -> Self {
        NewTask {
            title: title.to_string(),
            description: description.map(str::to_string),
            due_date,
        }
    }
}

/// Partial update of a task. `None` leaves a field untouched; the nested
/// options on `description` and `due_date` allow clearing them.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none() && self.due_date.is_none()
    }
}

mod created_at_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(dt: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => s.serialize_str(&dt.format(FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|s| NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}
