//! tick show command implementation.

use std::path::PathBuf;

use crate::cli::open_store;
use crate::datetime;
use crate::error::{Error, Result};
use crate::output::{OutputOptions, Report};
use crate::task::Task;

pub struct ShowOptions {
    pub id: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ShowOutput {
    task: Task,
}

pub fn run(options: ShowOptions) -> Result<()> {
    let (_storage, store) = open_store(options.data_dir)?;

    let task = store
        .get(&options.id)
        .cloned()
        .ok_or_else(|| Error::TaskNotFound(options.id.clone()))?;

    let status = if task.completed { "completed" } else { "pending" };

    let mut report = Report::new("Task");
    report.field("id", task.id.clone());
    report.field("title", task.title.clone());
    report.field("scheduled", datetime::format_long(task.datetime));
    report.field("status", status);
    if !task.description.is_empty() {
        report.row(task.description.clone());
    }

    report.emit(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "show",
        &ShowOutput { task },
    )
}
