use crate::{
    db::tasks::Tasks,
    libs::{
        formatter::parse_date,
        messages::Message,
        task::{TaskStatus, TaskUpdate},
    },
    msg_bail_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: i64,
    /// New title
    #[arg(short, long)]
    title: Option<String>,
    /// New description; an empty string clears it
    #[arg(short, long)]
    description: Option<String>,
    /// New status
    #[arg(short, long, value_enum)]
    status: Option<TaskStatus>,
    /// New due date in YYYY-MM-DD format; an empty string clears it
    #[arg(long)]
    due: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let update = TaskUpdate {
        title: args.title,
        description: args.description.map(|d| Some(d).filter(|d| !d.trim().is_empty())),
        status: args.status,
        due_date: args.due.as_deref().map(parse_date).transpose()?,
    };

    if update.is_empty() {
        msg_warning!(Message::NoChangesProvided);
        return Ok(());
    }

    if !Tasks::new()?.update(args.id, &update)? {
        msg_bail_anyhow!(Message::TaskNotFound(args.id));
    }

    msg_success!(Message::TaskUpdated(args.id));
    Ok(())
}
