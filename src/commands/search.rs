use super::list::TaskListing;
use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in titles and descriptions
    #[arg(required = true)]
    keyword: String,
    /// Print the matches as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    let tasks = Tasks::new()?.search(&args.keyword)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&TaskListing::new(&tasks))?);
        return Ok(());
    }

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::tasks(&tasks)?;
    msg_print!(Message::TasksMatching(tasks.len(), args.keyword));
    Ok(())
}
