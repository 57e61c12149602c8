use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        task::TaskFilter,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,
    /// Output file (defaults to a timestamped name in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Only tasks that are not done yet
    #[arg(long, conflicts_with = "done")]
    pending: bool,
    /// Only finished tasks
    #[arg(long)]
    done: bool,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let filter = TaskFilter::from_flags(args.pending, args.done, super::list::default_filter(&config));
    let tasks = Tasks::new()?.fetch(filter)?;

    let exporter = Exporter::new(args.format, args.output);
    let count = exporter.export(&tasks)?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string(), count));
    Ok(())
}
