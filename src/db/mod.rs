//! Persistence layer for tasktrack.
//!
//! A single SQLite database holds the `tasks` table plus the `migrations`
//! bookkeeping table. Opening a [`db::Db`] always brings the schema up to
//! date first.
//!
//! ## Usage
//!
//! ```rust
//! use tasktrack::db::{db::Db, tasks::Tasks};
//! use tasktrack::libs::task::{NewTask, SortKey, TaskFilter};
//!
//! let mut tasks = Tasks::from_db(Db::in_memory()?);
//! tasks.insert(&NewTask::new("Review code", Some("Check PR #123"), None))?;
//! let listed = tasks.list(TaskFilter::All, SortKey::Title, true)?;
//! assert_eq!(listed.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management.
pub mod db;

/// Versioned schema changes and their history.
pub mod migrations;

/// CRUD, search and sorted listing of tasks.
pub mod tasks;
