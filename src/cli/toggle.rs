//! tick toggle command implementation.

use std::path::PathBuf;

use crate::cli::open_store;
use crate::error::{Error, Result};
use crate::output::{OutputOptions, Report};

pub struct ToggleOptions {
    pub id: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ToggleOutput {
    id: String,
    completed: bool,
}

pub fn run(options: ToggleOptions) -> Result<()> {
    let (_storage, mut store) = open_store(options.data_dir)?;

    let completed = store
        .toggle(&options.id)?
        .ok_or_else(|| Error::TaskNotFound(options.id.clone()))?;

    let headline = if completed {
        "Task completed"
    } else {
        "Task reopened"
    };

    let mut report = Report::new(headline);
    report.field("id", options.id.clone());
    if let Some(task) = store.get(&options.id) {
        report.field("title", task.title.clone());
    }
    report.field("completed", completed.to_string());

    report.emit(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "toggle",
        &ToggleOutput {
            id: options.id,
            completed,
        },
    )
}
