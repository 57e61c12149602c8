//! The detail screen: create a task or rename an existing one.
//!
//! Names are validated here (1 to 50 characters, as typed) before
//! anything reaches storage.

use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{validate_name, Task},
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name; prompted for when omitted
    name: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to edit
    id: i64,
    /// New name; prompted for when omitted
    #[arg(short, long)]
    name: Option<String>,
}

pub fn add(args: AddArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    handle_add(&mut tasks, args.name)
}

pub fn edit(args: EditArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    handle_edit(&mut tasks, args.id, args.name)
}

pub(crate) fn handle_add(tasks: &mut Tasks, name: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => prompt_name(None)?,
    };

    let name = match validate_name(&name) {
        Ok(name) => name,
        Err(e) => {
            msg_error!(Message::InvalidTaskName(e.to_string()));
            return Ok(());
        }
    };

    let task = create_task(tasks, &name)?;
    msg_success!(Message::TaskCreated(task.id.unwrap_or_default()));
    Ok(())
}

pub(crate) fn handle_edit(tasks: &mut Tasks, id: i64, name: Option<String>) -> Result<()> {
    let task = match tasks.get_by_id(id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
    };

    msg_print!(Message::EditingTask(task.name.clone()));

    let name = match name {
        Some(name) => name,
        None => prompt_name(Some(&task.name))?,
    };

    let name = match validate_name(&name) {
        Ok(name) => name,
        Err(e) => {
            msg_error!(Message::InvalidTaskName(e.to_string()));
            return Ok(());
        }
    };

    if name == task.name {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    match rename_task(tasks, id, &name)? {
        Some(_) => msg_success!(Message::TaskUpdated(id)),
        None => msg_error!(Message::TaskNotFoundWithId(id)),
    }
    Ok(())
}

/// Persists a new task with an already validated name.
pub fn create_task(tasks: &mut Tasks, name: &str) -> Result<Task> {
    let mut task = Task::new(name);
    tasks.save(&mut task)?;
    Ok(task)
}

/// Renames the task with `id`, keeping its done flag. `None` if no such task.
pub fn rename_task(tasks: &mut Tasks, id: i64, name: &str) -> Result<Option<Task>> {
    let Some(mut task) = tasks.get_by_id(id)? else {
        return Ok(None);
    };

    task.name = name.to_string();
    if tasks.update(&task)? == 0 {
        return Ok(None);
    }
    Ok(Some(task))
}

fn check_name(input: &String) -> Result<(), String> {
    validate_name(input).map(|_| ()).map_err(|e| e.to_string())
}

fn prompt_name(current: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let name = match current {
        Some(current) => Input::<String>::with_theme(&theme)
            .with_prompt(Message::PromptTaskName.to_string())
            .default(current.to_string())
            .validate_with(check_name)
            .interact_text()?,
        None => Input::<String>::with_theme(&theme)
            .with_prompt(Message::PromptTaskName.to_string())
            .validate_with(check_name)
            .interact_text()?,
    };
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tasks: &mut Tasks) -> Vec<String> {
        tasks.fetch_all().unwrap().into_iter().map(|t| t.name).collect()
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut tasks = Tasks::open_in_memory().unwrap();

        handle_add(&mut tasks, Some("".into())).unwrap();
        assert!(tasks.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn test_add_rejects_overlong_name() {
        let mut tasks = Tasks::open_in_memory().unwrap();

        handle_add(&mut tasks, Some("a".repeat(51))).unwrap();
        assert!(tasks.fetch_all().unwrap().is_empty());

        handle_add(&mut tasks, Some("a".repeat(50))).unwrap();
        assert_eq!(names(&mut tasks), vec!["a".repeat(50)]);
    }

    #[test]
    fn test_add_writes_one_row() {
        let mut tasks = Tasks::open_in_memory().unwrap();

        handle_add(&mut tasks, Some("Buy milk".into())).unwrap();

        let all = tasks.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Buy milk");
        assert!(!all[0].done);
    }

    #[test]
    fn test_edit_with_empty_name_keeps_old_name() {
        let mut tasks = Tasks::open_in_memory().unwrap();
        let id = create_task(&mut tasks, "Buy milk").unwrap().id.unwrap();

        handle_edit(&mut tasks, id, Some("".into())).unwrap();
        assert_eq!(names(&mut tasks), vec!["Buy milk"]);

        handle_edit(&mut tasks, id, Some("a".repeat(51))).unwrap();
        assert_eq!(names(&mut tasks), vec!["Buy milk"]);
    }

    #[test]
    fn test_edit_renames_and_keeps_done() {
        let mut tasks = Tasks::open_in_memory().unwrap();
        let mut task = create_task(&mut tasks, "Buy milk").unwrap();
        task.done = true;
        tasks.update(&task).unwrap();

        handle_edit(&mut tasks, task.id.unwrap(), Some("Buy oat milk".into())).unwrap();

        let stored = tasks.get_by_id(task.id.unwrap()).unwrap().unwrap();
        assert_eq!(stored.name, "Buy oat milk");
        assert!(stored.done);
    }

    #[test]
    fn test_edit_missing_id_is_not_an_error() {
        let mut tasks = Tasks::open_in_memory().unwrap();
        create_task(&mut tasks, "Buy milk").unwrap();

        handle_edit(&mut tasks, 999, Some("Other".into())).unwrap();
        assert_eq!(names(&mut tasks), vec!["Buy milk"]);
    }
}
