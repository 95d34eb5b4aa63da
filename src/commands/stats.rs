//! Summary statistics and text charts over all tasks.

use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        stats::{completion_trend, due_date_buckets, status_counts, TaskStats},
        task::TaskFilter,
        view::View,
    },
    msg_info,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use serde_json::json;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Print statistics and chart series as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let tasks = Tasks::new()?.fetch(TaskFilter::All)?;
    let today = Local::now().date_naive();

    let stats = TaskStats::compute(&tasks, today);
    let statuses = status_counts(&tasks);
    let buckets = due_date_buckets(&tasks, today);
    let trend = completion_trend(&tasks, today);

    if args.json {
        let body = json!({
            "success": true,
            "statistics": stats,
            "charts": {
                "status": statuses.iter().map(|(status, count)| json!({ "label": status, "count": count })).collect::<Vec<_>>(),
                "due_dates": buckets.iter().map(|(bucket, count)| json!({ "label": bucket.label(), "count": count })).collect::<Vec<_>>(),
                "trend": trend,
            },
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    View::stats(&stats)?;

    // Charts over an empty store carry no information
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::status_chart(&statuses)?;
    View::due_date_chart(&buckets)?;
    View::trend_chart(&trend)?;
    Ok(())
}
