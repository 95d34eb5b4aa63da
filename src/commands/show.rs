use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::Task, view::View},
    msg_error_anyhow,
};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID
    id: i64,
    /// Print the task as JSON
    #[arg(long)]
    json: bool,
}

/// JSON envelope for a single task.
#[derive(Debug, Serialize)]
pub struct TaskRecord<'a> {
    pub success: bool,
    pub task: &'a Task,
}

impl<'a> TaskRecord<'a> {
    pub fn new(task: &'a Task) -> Self {
        TaskRecord { success: true, task }
    }
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let task = Tasks::new()?
        .get_by_id(args.id)?
        .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(args.id)))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&TaskRecord::new(&task))?);
    } else {
        View::task(&task)?;
    }
    Ok(())
}
