//! tick edit command implementation.

use std::path::PathBuf;

use crate::cli::open_store;
use crate::datetime;
use crate::error::{Error, Result};
use crate::output::{OutputOptions, Report};
use crate::task::{Task, TaskPatch};

pub struct EditOptions {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub at: Option<String>,
    pub completed: Option<bool>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct EditOutput {
    task: Task,
}

pub fn run(options: EditOptions) -> Result<()> {
    if let Some(title) = options.title.as_deref() {
        if title.trim().is_empty() {
            return Err(Error::InvalidArgument("title cannot be empty".to_string()));
        }
    }

    let patch = TaskPatch {
        title: options.title,
        description: options.description,
        datetime: options
            .at
            .as_deref()
            .map(datetime::parse_datetime)
            .transpose()?,
        completed: options.completed,
    };

    if patch.is_empty() {
        return Err(Error::InvalidArgument(
            "nothing to change; pass at least one of --title, --description, --at, --completed"
                .to_string(),
        ));
    }

    let (_storage, mut store) = open_store(options.data_dir)?;
    if !store.update(&options.id, patch)? {
        return Err(Error::TaskNotFound(options.id));
    }

    let task = store
        .get(&options.id)
        .cloned()
        .ok_or_else(|| Error::TaskNotFound(options.id.clone()))?;

    let mut report = Report::new("Task updated");
    report.field("id", task.id.clone());
    report.field("title", task.title.clone());
    report.field("scheduled", datetime::format_long(task.datetime));

    report.emit(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "edit",
        &EditOutput { task },
    )
}
