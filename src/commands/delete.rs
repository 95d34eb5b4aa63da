use crate::{
    db::tasks::Tasks,
    libs::{
        messages::{prompts, Message},
        task::{SortKey, Task, TaskFilter},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// IDs of the tasks to delete
    #[arg(required = true)]
    ids: Vec<i64>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

/// Requested ids with no matching task, in request order, without repeats.
pub fn missing_ids(requested: &[i64], found: &[Task]) -> Vec<i64> {
    let mut missing: Vec<i64> = Vec::new();
    for id in requested {
        if !found.iter().any(|task| task.id == *id) && !missing.contains(id) {
            missing.push(*id);
        }
    }
    missing
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let found = tasks.list(TaskFilter::ByIds(args.ids.clone()), SortKey::Id, true)?;
    if found.is_empty() {
        msg_bail_anyhow!(Message::TaskNotFound(args.ids[0]));
    }
    for id in missing_ids(&args.ids, &found) {
        msg_warning!(Message::TaskNotFound(id));
    }

    if !args.yes {
        msg_print!(Message::TasksToBeDeleted, true);
        View::tasks(&found)?;

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompts::PROMPT_CONFIRM_DELETE)
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let ids: Vec<i64> = found.iter().map(|task| task.id).collect();
    let deleted = tasks.delete_many(&ids)?;

    if deleted == 1 {
        msg_success!(Message::TaskDeleted(ids[0]));
    } else {
        msg_success!(Message::TasksDeletedCount(deleted));
    }
    Ok(())
}
