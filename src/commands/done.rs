use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::TaskStatus},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ID
    id: i64,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    match tasks.get_by_id(args.id)? {
        None => msg_bail_anyhow!(Message::TaskNotFound(args.id)),
        Some(task) if task.status == TaskStatus::Completed => {
            msg_info!(Message::TaskAlreadyCompleted(args.id));
        }
        Some(_) => {
            tasks.complete(args.id)?;
            msg_success!(Message::TaskCompleted(args.id));
        }
    }

    Ok(())
}
