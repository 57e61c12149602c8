pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod task;
pub mod toggle;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Show the task list")]
    List(list::ListArgs),
    #[command(about = "Create a task")]
    Add(task::AddArgs),
    #[command(about = "Rename a task")]
    Edit(task::EditArgs),
    #[command(about = "Mark a task as done, or as not done again")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

/// Without a subcommand the interactive list screen opens.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::List(args)) => list::cmd(args),
            Some(Commands::Add(args)) => task::add(args),
            Some(Commands::Edit(args)) => task::edit(args),
            Some(Commands::Toggle(args)) => toggle::cmd(args),
            Some(Commands::Delete(args)) => delete::cmd(args),
            Some(Commands::Export(args)) => export::cmd(args),
            Some(Commands::Init(args)) => init::cmd(args),
            None => list::interactive(),
        }
    }
}
