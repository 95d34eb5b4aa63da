//! Filtered, sorted task listing.
//!
//! Sort key and direction default to the saved configuration; flags on the
//! command line win over it.

use crate::{
    db::tasks::Tasks,
    libs::{
        config::{Config, ListConfig},
        messages::Message,
        task::{SortKey, Task, TaskFilter, TaskStatus},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show tasks with this status
    #[arg(short, long, value_enum)]
    status: Option<TaskStatus>,
    /// Field to sort by
    #[arg(long, value_enum)]
    sort_by: Option<SortKey>,
    /// Sort in descending order
    #[arg(long, conflicts_with = "asc")]
    desc: bool,
    /// Sort in ascending order
    #[arg(long)]
    asc: bool,
    /// Print the listing as JSON
    #[arg(long)]
    json: bool,
}

/// JSON envelope shared by `list` and `search`.
#[derive(Debug, Serialize)]
pub struct TaskListing<'a> {
    pub success: bool,
    pub tasks: &'a [Task],
    pub count: usize,
}

impl<'a> TaskListing<'a> {
    pub fn new(tasks: &'a [Task]) -> Self {
        TaskListing {
            success: true,
            tasks,
            count: tasks.len(),
        }
    }
}

/// Sort key and direction for a listing. Flags win over the saved defaults.
pub fn resolve_order(sort_by: Option<SortKey>, asc: bool, desc: bool, defaults: ListConfig) -> (SortKey, bool) {
    let ascending = match (asc, desc) {
        (true, _) => true,
        (_, true) => false,
        _ => defaults.ascending,
    };

    (sort_by.unwrap_or(defaults.sort_by), ascending)
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let defaults = Config::read()?.list_defaults();
    let (sort_by, ascending) = resolve_order(args.sort_by, args.asc, args.desc, defaults);

    let filter = args.status.map_or(TaskFilter::All, TaskFilter::Status);
    let tasks = Tasks::new()?.list(filter, sort_by, ascending)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&TaskListing::new(&tasks))?);
        return Ok(());
    }

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::tasks(&tasks)?;
    msg_print!(Message::TasksFound(tasks.len()));
    Ok(())
}
