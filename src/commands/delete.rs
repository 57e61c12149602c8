use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let config = Config::read()?;
    let mut tasks = Tasks::new()?;
    let skip_confirmation = args.yes || !config.ui.confirm_delete;

    handle_delete(&mut tasks, args.id, skip_confirmation)
}

pub(crate) fn handle_delete(tasks: &mut Tasks, id: i64, skip_confirmation: bool) -> Result<()> {
    let task = match tasks.get_by_id(id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
    };

    if !skip_confirmation {
        msg_print!(Message::DeleteTaskTitle(task.name.clone()));
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask.to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if tasks.delete(id)? > 0 {
        msg_success!(Message::TaskDeleted(id));
    } else {
        msg_error!(Message::TaskNotFoundWithId(id));
    }
    Ok(())
}
