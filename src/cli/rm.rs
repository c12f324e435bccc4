//! tick rm command implementation.

use std::path::PathBuf;

use crate::cli::open_store;
use crate::error::{Error, Result};
use crate::output::{OutputOptions, Report};
use crate::task::Task;

pub struct RmOptions {
    pub id: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct RmOutput {
    removed: Task,
    remaining: usize,
}

pub fn run(options: RmOptions) -> Result<()> {
    let (_storage, mut store) = open_store(options.data_dir)?;

    let removed = store
        .remove(&options.id)?
        .ok_or_else(|| Error::TaskNotFound(options.id.clone()))?;

    let mut report = Report::new("Task removed");
    report.field("id", removed.id.clone());
    report.field("title", removed.title.clone());
    report.field("remaining", store.len().to_string());

    report.emit(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "rm",
        &RmOutput {
            remaining: store.len(),
            removed,
        },
    )
}
