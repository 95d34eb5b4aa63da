use crate::{
    db::tasks::Tasks,
    libs::{formatter::parse_date, messages::Message, task::NewTask},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Optional longer description
    #[arg(short, long)]
    description: Option<String>,
    /// Due date in YYYY-MM-DD format
    #[arg(long)]
    due: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let due_date = match args.due.as_deref() {
        Some(due) => parse_date(due)?,
        None => None,
    };

    let task = NewTask::new(&args.title, args.description.as_deref(), due_date);
    let id = Tasks::new()?.insert(&task)?;

    msg_success!(Message::TaskCreated(id));
    Ok(())
}
