//! Display implementation for tasktrack messages.
//!
//! All message text is defined here, in one match, so wording stays
//! consistent and every new variant needs an explicit formatting decision.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task added with ID: {}", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("Task {} not found", id),
            Message::TaskAlreadyCompleted(id) => format!("Task {} is already completed", id),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s) successfully.", count),
            Message::TasksFound(count) => format!("Found {} tasks", count),
            Message::TasksMatching(count, keyword) => format!("Found {} tasks matching '{}'", count, keyword),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::TasksToBeDeleted => "Tasks to be deleted:".to_string(),
            Message::NoChangesProvided => "No fields to update. Pass at least one of --title, --description, --status, --due".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === SORT MESSAGES ===
            Message::SortingTasks(count, key, ascending) => format!(
                "Sorting {} tasks by {} ({})",
                count,
                key,
                if *ascending { "ascending" } else { "descending" }
            ),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleList => "Task listing defaults".to_string(),

            // === STATISTICS MESSAGES ===
            Message::StatsHeader => "Task statistics".to_string(),
            Message::StatusChartHeader => "Task Status".to_string(),
            Message::DueDateChartHeader => "Due Dates".to_string(),
            Message::CompletionTrendHeader => "Completed Tasks".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Opened database at {}", path),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NothingToRollback => "Nothing to rollback".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),
        };

        write!(f, "{}", text)
    }
}
