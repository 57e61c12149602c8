use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::Task},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// ID of the task to tick off or reopen
    id: i64,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    handle_toggle(&mut tasks, args.id)
}

pub(crate) fn handle_toggle(tasks: &mut Tasks, id: i64) -> Result<()> {
    match toggle_task(tasks, id)? {
        Some(task) if task.done => msg_success!(Message::TaskMarkedDone(task.name)),
        Some(task) => msg_success!(Message::TaskMarkedPending(task.name)),
        None => msg_error!(Message::TaskNotFoundWithId(id)),
    }
    Ok(())
}

/// Flips the done flag of the task with `id` and returns the updated task.
pub fn toggle_task(tasks: &mut Tasks, id: i64) -> Result<Option<Task>> {
    let Some(mut task) = tasks.get_by_id(id)? else {
        return Ok(None);
    };

    task.toggle();
    if tasks.update(&task)? == 0 {
        return Ok(None);
    }
    Ok(Some(task))
}
