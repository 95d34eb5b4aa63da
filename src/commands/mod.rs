pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod init;
pub mod list;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod search;
pub mod show;
pub mod stats;

use crate::libs::logging::{APP_METADATA_DESCRIPTION, APP_METADATA_NAME, APP_METADATA_OWNER, APP_METADATA_VERSION};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure listing defaults")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, filtered and sorted")]
    List(list::ListArgs),
    #[command(about = "Show a single task")]
    Show(show::ShowArgs),
    #[command(about = "Change fields of a task")]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task as completed")]
    Done(done::DoneArgs),
    #[command(about = "Delete tasks")]
    Delete(delete::DeleteArgs),
    #[command(about = "Search titles and descriptions")]
    Search(search::SearchArgs),
    #[command(about = "Show statistics and charts")]
    Stats(stats::StatsArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(
    name = APP_METADATA_NAME,
    author = APP_METADATA_OWNER,
    version = APP_METADATA_VERSION,
    about = APP_METADATA_DESCRIPTION,
    long_about = None
)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Search(args) => search::cmd(args),
            Commands::Stats(args) => stats::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
