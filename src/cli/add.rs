//! tick add command implementation.

use std::path::PathBuf;

use crate::cli::open_store;
use crate::datetime;
use crate::error::{Error, Result};
use crate::output::{OutputOptions, Report};
use crate::task::Task;

pub struct AddOptions {
    pub title: String,
    pub description: String,
    pub at: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct AddOutput {
    task: Task,
}

pub fn run(options: AddOptions) -> Result<()> {
    let title = options.title.trim();
    if title.is_empty() {
        return Err(Error::InvalidArgument("title cannot be empty".to_string()));
    }

    let datetime = match options.at.as_deref() {
        Some(value) => datetime::parse_datetime(value)?,
        None => datetime::now(),
    };

    let (_storage, mut store) = open_store(options.data_dir)?;
    let task = store
        .add(title, &options.description, datetime)?
        .cloned()
        .ok_or_else(|| Error::InvalidArgument("title cannot be empty".to_string()))?;

    let mut report = Report::new("Task added");
    report.field("id", task.id.clone());
    report.field("title", task.title.clone());
    report.field("scheduled", datetime::format_long(task.datetime));

    report.emit(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &AddOutput { task },
    )
}
