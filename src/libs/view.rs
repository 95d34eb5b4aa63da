//! Console rendering of tasks, statistics and text bar charts.

use super::formatter::FormattedTask;
use super::messages::Message;
use super::stats::{DueBucket, TaskStats, TrendPoint};
use super::task::{Task, TaskStatus};
use crate::msg_print;
use anyhow::Result;
use prettytable::{format, row, Table};

/// Widest bar drawn by [`View::chart`], in characters.
pub const CHART_WIDTH: usize = 30;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row!["ID", "TITLE", "DESCRIPTION", "STATUS", "DUE DATE", "CREATED"]);
        for task in tasks.iter().map(FormattedTask::from) {
            table.add_row(row![task.id, task.title, task.description, task.status, task.due_date, task.created_at]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task(task: &Task) -> Result<()> {
        let task = FormattedTask::from(task);
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["Title", task.title]);
        table.add_row(row!["Description", task.description]);
        table.add_row(row!["Status", task.status]);
        table.add_row(row!["Due date", task.due_date]);
        table.add_row(row!["Created", task.created_at]);
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &TaskStats) -> Result<()> {
        msg_print!(Message::StatsHeader, true);

        let mut table = Table::new();
        table.add_row(row!["Total", r->stats.total]);
        table.add_row(row!["Pending", r->stats.pending]);
        table.add_row(row!["Completed", r->stats.completed]);
        table.add_row(row!["Overdue", r->stats.overdue]);
        table.add_row(row!["Completion rate", r->format!("{:.2}%", stats.completion_rate)]);
        table.printstd();

        Ok(())
    }

    pub fn status_chart(counts: &[(TaskStatus, usize)]) -> Result<()> {
        let data: Vec<(String, usize)> = counts.iter().map(|(status, count)| (status.to_string(), *count)).collect();
        Self::chart(&Message::StatusChartHeader, &data)
    }

    pub fn due_date_chart(buckets: &[(DueBucket, usize)]) -> Result<()> {
        let data: Vec<(String, usize)> = buckets.iter().map(|(bucket, count)| (bucket.to_string(), *count)).collect();
        Self::chart(&Message::DueDateChartHeader, &data)
    }

    pub fn trend_chart(points: &[TrendPoint]) -> Result<()> {
        let data: Vec<(String, usize)> = points.iter().map(|p| (p.label.clone(), p.completed)).collect();
        Self::chart(&Message::CompletionTrendHeader, &data)
    }

    /// Horizontal bar chart, bars scaled against the largest value.
    pub fn chart(title: &Message, data: &[(String, usize)]) -> Result<()> {
        msg_print!(title, true);

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);

        let max = data.iter().map(|(_, value)| *value).max().unwrap_or(0);
        for (label, value) in data {
            table.add_row(row![label, bar(*value, max, CHART_WIDTH), r->value]);
        }
        table.printstd();

        Ok(())
    }
}

/// Bar of `value` relative to `max`, at most `width` characters. A non-zero
/// value always gets at least one block.
pub fn bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let len = (value * width).div_ceil(max).clamp(1, width);
    "█".repeat(len)
}
