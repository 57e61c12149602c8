//! Export of the task list to CSV or JSON.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::db::tasks::Tasks;
//! use tasklist::libs::export::{ExportFormat, Exporter};
//!
//! let tasks = Tasks::new()?.fetch_all()?;
//! Exporter::new(ExportFormat::Csv, None).export(&tasks)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::task::Task;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with an `ID,Name,Done` header.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportTask {
    id: i64,
    name: String,
    done: bool,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id.unwrap_or(0),
            name: task.name.clone(),
            done: task.done,
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named after the current local time.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "tasklist_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `tasks` to the output file and returns how many were written.
    pub fn export(&self, tasks: &[Task]) -> Result<usize> {
        let export_tasks: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();

        match self.format {
            ExportFormat::Csv => self.export_csv(&export_tasks)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&export_tasks)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }

        Ok(export_tasks.len())
    }

    fn export_csv(&self, tasks: &[ExportTask]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Name", "Done"])?;

        for task in tasks {
            wtr.write_record([task.id.to_string(), task.name.clone(), task.done.to_string()])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
