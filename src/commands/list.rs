//! The list screen.
//!
//! `tasklist list` prints the table once. Running `tasklist` with no
//! subcommand opens the interactive version, which re-reads the table after
//! every action.

use super::{delete, task, toggle};
use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{Task, TaskFilter},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only tasks that are not done yet
    #[arg(long, conflicts_with = "done")]
    pending: bool,
    /// Only finished tasks
    #[arg(long)]
    done: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let filter = TaskFilter::from_flags(args.pending, args.done, default_filter(&config));

    let tasks = Tasks::new()?.fetch(filter)?;
    render(&tasks)
}

pub fn default_filter(config: &Config) -> TaskFilter {
    if config.ui.hide_done {
        TaskFilter::Pending
    } else {
        TaskFilter::All
    }
}

fn render(tasks: &[Task]) -> Result<()> {
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(tasks)
}

pub fn interactive() -> Result<()> {
    let config = Config::read()?;
    let filter = default_filter(&config);
    let mut tasks = Tasks::new()?;

    let actions = [
        Message::MenuAddTask.to_string(),
        Message::MenuToggleTask.to_string(),
        Message::MenuEditTask.to_string(),
        Message::MenuDeleteTask.to_string(),
        Message::MenuQuit.to_string(),
    ];

    loop {
        let list = tasks.fetch(filter)?;
        render(&list)?;

        let action = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectTaskAction.to_string())
            .items(&actions)
            .default(0)
            .interact_opt()?;

        match action {
            Some(0) => task::handle_add(&mut tasks, None)?,
            Some(1) => {
                if let Some(id) = select_task(&list, Message::SelectTaskToToggle)? {
                    toggle::handle_toggle(&mut tasks, id)?;
                }
            }
            Some(2) => {
                if let Some(id) = select_task(&list, Message::SelectTaskToEdit)? {
                    task::handle_edit(&mut tasks, id, None)?;
                }
            }
            Some(3) => {
                if let Some(id) = select_task(&list, Message::SelectTaskToDelete)? {
                    delete::handle_delete(&mut tasks, id, !config.ui.confirm_delete)?;
                }
            }
            _ => break,
        }
    }

    Ok(())
}

/// Lets the user pick one of `list`. `None` when the list is empty or the
/// prompt is dismissed.
fn select_task(list: &[Task], prompt: Message) -> Result<Option<i64>> {
    if list.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = list.iter().map(View::task_line).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.and_then(|index| list[index].id))
}
