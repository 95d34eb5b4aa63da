//! Date parsing and display formatting for task fields.
//!
//! All user-facing dates use the `YYYY-MM-DD` pattern and timestamps use
//! `YYYY-MM-DD HH:MM`. Missing values render as `N/A`.
//!
//! ## Examples
//!
//! ```rust
//! use tasktrack::libs::formatter::{format_date, parse_date};
//!
//! let due = parse_date("2024-12-31").unwrap();
//! assert_eq!(format_date(due), "2024-12-31");
//! assert_eq!(format_date(None), "N/A");
//! ```

use super::error::TaskError;
use super::task::Task;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const MISSING: &str = "N/A";

/// Parses a `YYYY-MM-DD` string. Blank input means "no date".
pub fn parse_date(input: &str) -> Result<Option<NaiveDate>, TaskError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map(Some)
        .map_err(|_| TaskError::InvalidDate(input.to_string()))
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_else(|| MISSING.to_string())
}

pub fn format_datetime(dt: Option<NaiveDateTime>) -> String {
    dt.map(|d| d.format(DATETIME_FORMAT).to_string()).unwrap_or_else(|| MISSING.to_string())
}

pub fn format_text(text: Option<&str>) -> String {
    match text {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => MISSING.to_string(),
    }
}

/// A task with every field rendered to display text.
///
/// Used by the table views so that `N/A` substitution and date formatting
/// happen in one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedTask {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub due_date: String,
    pub created_at: String,
}

impl From<&Task> for FormattedTask {
    fn from(task: &Task) -> Self {
        FormattedTask {
            id: task.id,
            title: format_text(task.title.as_deref()),
            description: format_text(task.description.as_deref()),
            status: task.status.to_string(),
            due_date: format_date(task.due_date),
            created_at: format_datetime(task.created_at),
        }
    }
}
