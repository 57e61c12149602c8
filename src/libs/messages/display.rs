//! Display implementation for tasklist messages.
//!
//! All user-facing text lives here, so commands only ever refer to a
//! `Message` variant and never to a literal string.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task created with ID {}", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskMarkedDone(name) => format!("'{}' marked as done", name),
            Message::TaskMarkedPending(name) => format!("'{}' marked as not done", name),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TasksNotFound => "No tasks yet. Add one with `tasklist add`".to_string(),
            Message::TasksHeader => "Tasks".to_string(),
            Message::InvalidTaskName(reason) => format!("Invalid task name: {}", reason),
            Message::ConfirmDeleteTask => "Are you sure you want to delete this task?".to_string(),
            Message::DeleteTaskTitle(name) => format!("Delete task '{}'", name),
            Message::EditingTask(name) => format!("Editing task: {}", name),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::PromptTaskName => "Task name".to_string(),

            // === LIST SCREEN MENU ===
            Message::SelectTaskAction => "What would you like to do?".to_string(),
            Message::SelectTaskToToggle => "Select task to tick off".to_string(),
            Message::SelectTaskToEdit => "Select task to edit".to_string(),
            Message::SelectTaskToDelete => "Select task to delete".to_string(),
            Message::MenuAddTask => "Add task".to_string(),
            Message::MenuToggleTask => "Toggle done".to_string(),
            Message::MenuEditTask => "Edit task".to_string(),
            Message::MenuDeleteTask => "Delete task".to_string(),
            Message::MenuQuit => "Quit".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleUi => "List settings".to_string(),
            Message::PromptDbFile => "Database file name".to_string(),
            Message::DbFileEmpty => "Database file name cannot be empty".to_string(),
            Message::PromptConfirmDeleteSetting => "Ask for confirmation before deleting a task?".to_string(),
            Message::PromptHideDoneSetting => "Hide finished tasks by default?".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path, count) => format!("Exported {} task(s) to {}", count, path),

            // === GENERAL ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", s)
    }
}
