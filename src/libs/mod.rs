//! Core library modules for the tasklist application.
//!
//! ## Usage
//!
//! ```rust
//! use tasklist::libs::task::{validate_name, Task};
//!
//! let name = validate_name("Buy milk")?;
//! let task = Task::new(&name);
//! assert!(!task.is_saved());
//! # Ok::<(), tasklist::libs::task::TaskError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod task;
pub mod view;
