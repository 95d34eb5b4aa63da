//! Typed errors raised by the task model and the sorter.
//!
//! Storage and command code propagate these through `anyhow::Result`; the
//! variants exist so callers (and tests) can match on the exact failure.

use thiserror::Error;

/// Failure of the task sorter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("Invalid sort key '{0}'. Expected one of: id, title, status, due_date, created_at")]
    InvalidSortKey(String),
}

/// Validation failures for task records and requests against the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("No fields to update")]
    NothingToUpdate,

    #[error("Search keyword must not be empty")]
    EmptyKeyword,

    #[error("Invalid date format: {0}. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid status '{0}'. Expected 'pending' or 'completed'")]
    InvalidStatus(String),
}
