//! Progress statistics and chart series derived from a task list.
//!
//! Every function here is pure: it takes the tasks and the reference date
//! explicitly, so the same input always yields the same figures.

use super::task::{Task, TaskStatus};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Number of days, ending today, covered by the completion trend.
pub const TREND_DAYS: i64 = 7;

/// Tasks due within this many days from today count as "this week".
pub const WEEK_HORIZON_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStats {
    #[serde(rename = "total_tasks")]
    pub total: usize,
    #[serde(rename = "pending_tasks")]
    pub pending: usize,
    #[serde(rename = "completed_tasks")]
    pub completed: usize,
    #[serde(rename = "overdue_tasks")]
    pub overdue: usize,
    /// Percentage of completed tasks, rounded to two decimals.
    pub completion_rate: f64,
}

impl TaskStats {
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let total = tasks.len();
        let pending = tasks.iter().filter(|t| t.status == TaskStatus::Pending).count();
        let completed = tasks.iter().filter(|t| t.status == TaskStatus::Completed).count();
        let overdue = tasks.iter().filter(|t| t.is_overdue(today)).count();

        let completion_rate = if total > 0 {
            (completed as f64 / total as f64 * 10_000.0).round() / 100.0
        } else {
            0.0
        };

        TaskStats {
            total,
            pending,
            completed,
            overdue,
            completion_rate,
        }
    }
}

/// Task counts per status, pending first. Both statuses are always present.
pub fn status_counts(tasks: &[Task]) -> Vec<(TaskStatus, usize)> {
    [TaskStatus::Pending, TaskStatus::Completed]
        .into_iter()
        .map(|status| (status, tasks.iter().filter(|t| t.status == status).count()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DueBucket {
    Overdue,
    ThisWeek,
    Later,
    NoDate,
}

impl DueBucket {
    pub const ALL: [DueBucket; 4] = [DueBucket::Overdue, DueBucket::ThisWeek, DueBucket::Later, DueBucket::NoDate];

    pub fn classify(due_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        match due_date {
            None => DueBucket::NoDate,
            Some(due) if due < today => DueBucket::Overdue,
            Some(due) if (due - today).num_days() <= WEEK_HORIZON_DAYS => DueBucket::ThisWeek,
            Some(_) => DueBucket::Later,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DueBucket::Overdue => "Overdue",
            DueBucket::ThisWeek => "This Week",
            DueBucket::Later => "Later",
            DueBucket::NoDate => "No Date",
        }
    }
}

impl fmt::Display for DueBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task counts per due-date bucket in [`DueBucket::ALL`] order.
///
/// Status is ignored here: a completed task with a past due date is still
/// counted as overdue.
pub fn due_date_buckets(tasks: &[Task], today: NaiveDate) -> Vec<(DueBucket, usize)> {
    DueBucket::ALL
        .into_iter()
        .map(|bucket| {
            let count = tasks.iter().filter(|t| DueBucket::classify(t.due_date, today) == bucket).count();
            (bucket, count)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// `MM/DD` label used on the chart axis.
    pub label: String,
    pub completed: usize,
}

/// Completed tasks per day over the last [`TREND_DAYS`] days, oldest first.
///
/// A completed task is attributed to the day it was created on; there is no
/// separate completion timestamp.
pub fn completion_trend(tasks: &[Task], today: NaiveDate) -> Vec<TrendPoint> {
    (0..TREND_DAYS)
        .rev()
        .map(|days_ago| {
            let date = today - Duration::days(days_ago);
            let completed = tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .filter(|t| t.created_at.is_some_and(|created| created.date() == date))
                .count();

            TrendPoint {
                date,
                label: date.format("%m/%d").to_string(),
                completed,
            }
        })
        .collect()
}
