//! The task entity and the name rules applied by the detail screen.
//!
//! Storage accepts any name; the 1..=50 character rule is enforced here and
//! checked by the commands before anything is written.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest task name accepted by the detail screen, in characters.
pub const MAX_NAME_LENGTH: usize = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Write your task.")]
    EmptyName,
    #[error("Task name is too long: {actual} characters (maximum {max})")]
    NameTooLong { max: usize, actual: usize },
    #[error("Task has not been saved yet")]
    Unsaved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Row identity, `None` until the task is first saved.
    pub id: Option<i64>,
    pub name: String,
    pub done: bool,
}

impl Task {
    pub fn new(name: &str) -> Self {
        Task {
            id: None,
            name: name.to_string(),
            done: false,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Pending,
    Done,
}

impl TaskFilter {
    /// Picks a filter from the mutually exclusive `--pending` / `--done` flags,
    /// falling back to `default` when neither is set.
    pub fn from_flags(pending: bool, done: bool, default: TaskFilter) -> Self {
        match (pending, done) {
            (true, _) => TaskFilter::Pending,
            (_, true) => TaskFilter::Done,
            _ => default,
        }
    }
}

/// Checks a task name exactly as typed and returns it unchanged.
pub fn validate_name(name: &str) -> Result<String, TaskError> {
    if name.is_empty() {
        return Err(TaskError::EmptyName);
    }

    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(TaskError::NameTooLong {
            max: MAX_NAME_LENGTH,
            actual: length,
        });
    }

    Ok(name.to_string())
}
