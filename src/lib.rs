//! # Tasktrack - a personal task tracker
//!
//! A command-line utility for recording tasks in a local SQLite database,
//! listing them in any order, searching them and summarising progress.
//!
//! ## Features
//!
//! - **Task Management**: Add, edit, complete, delete and search tasks
//! - **Sorted Listings**: Stable ordering by id, title, status, due date or
//!   creation time, ascending or descending, with missing values last
//! - **Statistics**: Completion rate, overdue count and text charts
//! - **JSON Output**: Machine-readable listings for scripting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
