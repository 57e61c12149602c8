//! Database layer for the tasklist application.
//!
//! Everything is stored in a single SQLite file with one table:
//!
//! ```text
//! tasks (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT, done INTEGER)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tasklist::db::tasks::Tasks;
//! use tasklist::libs::task::Task;
//!
//! let mut tasks = Tasks::open_in_memory()?;
//! let id = tasks.insert(&Task::new("Buy milk"))?;
//! assert_eq!(tasks.get_by_id(id)?.map(|t| t.name), Some("Buy milk".to_string()));
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management; applies migrations on open.
pub mod db;

/// Versioned schema changes.
pub mod migrations;

/// CRUD operations on tasks.
pub mod tasks;
