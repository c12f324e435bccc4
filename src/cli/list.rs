//! tick list command implementation.

use std::path::PathBuf;

use crate::cli::open_store;
use crate::config::Config;
use crate::datetime;
use crate::error::Result;
use crate::output::{OutputOptions, Report};
use crate::task::Task;
use crate::view::{self, FilterMode, SortMode, ViewOptions};

pub struct ListOptions {
    pub filter: Option<FilterMode>,
    pub sort: Option<SortMode>,
    pub search: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ListOutput {
    total: usize,
    filter: FilterMode,
    sort: SortMode,
    #[serde(skip_serializing_if = "String::is_empty")]
    search: String,
    tasks: Vec<Task>,
}

pub fn run(options: ListOptions) -> Result<()> {
    let (storage, store) = open_store(options.data_dir)?;
    let config = Config::load_from_dir(&storage);

    let view = ViewOptions {
        filter: options.filter.unwrap_or(config.list.default_filter),
        sort: options.sort.unwrap_or(config.list.default_sort),
        search: options.search,
    };
    let tasks = view::apply(store.tasks(), &view);

    let mut report = Report::new("Tasks");
    report.field("total", tasks.len().to_string());
    report.field("filter", view.filter.to_string());
    report.field("sort", view.sort.to_string());
    if !view.search.is_empty() {
        report.field("search", view.search.clone());
    }
    for task in &tasks {
        let marker = if task.completed { "x" } else { " " };
        report.row(format!(
            "[{marker}] {} {} ({})",
            task.id,
            task.title,
            datetime::format_long(task.datetime)
        ));
    }
    if tasks.is_empty() {
        report.hint("tick add <title>");
    }

    let output = ListOutput {
        total: tasks.len(),
        filter: view.filter,
        sort: view.sort,
        search: view.search,
        tasks,
    };

    report.emit(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "list",
        &output,
    )
}
