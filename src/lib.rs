//! # tasklist
//!
//! A minimal single-user task list for the terminal.
//!
//! ## Features
//!
//! - **List Screen**: Tasks with a done checkbox, toggled and deleted in place
//! - **Detail Screen**: Create a task or rename an existing one
//! - **Local Storage**: One SQLite table (`id`, `name`, `done`)
//! - **Data Export**: Dump the list to CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
