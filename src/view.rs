//! Derived view computation: filter, search, sort.
//!
//! The pipeline is a pure function of its inputs and holds no state. The
//! three steps compose in a fixed order: filter by completion status, then
//! filter by search query, then sort. Sorting is stable, so tasks with equal
//! keys keep their original list order.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Completion-status filter applied before search and sort.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Keep every task
    #[default]
    All,
    /// Keep only completed tasks
    Completed,
    /// Keep only tasks not yet completed
    Pending,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::All => write!(f, "all"),
            FilterMode::Completed => write!(f, "completed"),
            FilterMode::Pending => write!(f, "pending"),
        }
    }
}

/// Ordering key applied to the filtered set.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Most recent scheduled date/time first
    #[default]
    Date,
    /// Ascending case-insensitive title order
    Title,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Date => write!(f, "date"),
            SortMode::Title => write!(f, "title"),
        }
    }
}

/// Inputs selecting what the view shows and in which order.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub filter: FilterMode,
    pub sort: SortMode,
    /// Case-insensitive substring match against titles; empty matches all.
    pub search: String,
}

/// Compute the display list for the given tasks and view inputs.
pub fn apply(tasks: &[Task], options: &ViewOptions) -> Vec<Task> {
    let query = options.search.to_lowercase();

    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| match options.filter {
            FilterMode::All => true,
            FilterMode::Completed => task.completed,
            FilterMode::Pending => !task.completed,
        })
        .filter(|task| query.is_empty() || task.title.to_lowercase().contains(&query))
        .cloned()
        .collect();

    match options.sort {
        SortMode::Date => visible.sort_by(|a, b| b.datetime.cmp(&a.datetime)),
        SortMode::Title => {
            visible.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .expect("date")
            .and_hms_opt(hour, 0, 0)
            .expect("time")
    }

    fn task(id: &str, title: &str, datetime: NaiveDateTime, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            datetime,
            completed,
        }
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|task| task.title.as_str()).collect()
    }

    #[test]
    fn filter_all_keeps_everything() {
        let tasks = vec![
            task("1", "Buy milk", at(1, 10), true),
            task("2", "Call mom", at(2, 10), false),
        ];

        let shown = apply(&tasks, &ViewOptions::default());
        assert_eq!(shown.len(), 2);
    }

    #[test]
    fn filter_completed_and_pending_partition() {
        let tasks = vec![
            task("1", "Buy milk", at(1, 10), true),
            task("2", "Call mom", at(2, 10), false),
            task("3", "Water plants", at(3, 10), true),
        ];

        let completed = apply(
            &tasks,
            &ViewOptions {
                filter: FilterMode::Completed,
                ..ViewOptions::default()
            },
        );
        assert!(completed.iter().all(|task| task.completed));
        assert_eq!(completed.len(), 2);

        let pending = apply(
            &tasks,
            &ViewOptions {
                filter: FilterMode::Pending,
                ..ViewOptions::default()
            },
        );
        assert!(pending.iter().all(|task| !task.completed));
        assert_eq!(titles(&pending), vec!["Call mom"]);
    }

    #[test]
    fn search_is_case_insensitive_and_title_only() {
        let tasks = vec![
            task("1", "Buy MILK", at(1, 10), false),
            Task {
                description: "milk for the cat".to_string(),
                ..task("2", "Call mom", at(2, 10), false)
            },
        ];

        let shown = apply(
            &tasks,
            &ViewOptions {
                search: "milk".to_string(),
                ..ViewOptions::default()
            },
        );
        assert_eq!(titles(&shown), vec!["Buy MILK"]);
    }

    #[test]
    fn search_runs_after_status_filter() {
        let tasks = vec![
            task("1", "Buy milk", at(1, 10), true),
            task("2", "Buy milk again", at(2, 10), false),
        ];

        let shown = apply(
            &tasks,
            &ViewOptions {
                filter: FilterMode::Pending,
                search: "milk".to_string(),
                ..ViewOptions::default()
            },
        );
        assert_eq!(titles(&shown), vec!["Buy milk again"]);
    }

    #[test]
    fn sort_date_is_newest_first() {
        let tasks = vec![
            task("1", "Buy milk", at(1, 10), false),
            task("2", "Call mom", at(2, 10), false),
            task("3", "Water plants", at(1, 18), false),
        ];

        let shown = apply(&tasks, &ViewOptions::default());
        assert_eq!(titles(&shown), vec!["Call mom", "Water plants", "Buy milk"]);
    }

    #[test]
    fn sort_title_is_ascending_case_insensitive() {
        let tasks = vec![
            task("1", "water plants", at(1, 10), false),
            task("2", "Buy milk", at(2, 10), false),
            task("3", "call mom", at(3, 10), false),
        ];

        let shown = apply(
            &tasks,
            &ViewOptions {
                sort: SortMode::Title,
                ..ViewOptions::default()
            },
        );
        assert_eq!(titles(&shown), vec!["Buy milk", "call mom", "water plants"]);
    }

    #[test]
    fn equal_keys_keep_list_order() {
        let tasks = vec![
            task("1", "same title", at(1, 10), false),
            task("2", "same title", at(1, 10), false),
            task("3", "same title", at(1, 10), false),
        ];

        for sort in [SortMode::Date, SortMode::Title] {
            let shown = apply(
                &tasks,
                &ViewOptions {
                    sort,
                    ..ViewOptions::default()
                },
            );
            let ids: Vec<&str> = shown.iter().map(|task| task.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2", "3"]);
        }
    }

    #[test]
    fn pipeline_is_idempotent() {
        let tasks = vec![
            task("1", "Buy milk", at(1, 10), true),
            task("2", "Call mom", at(2, 10), false),
            task("3", "Water plants", at(1, 18), false),
        ];
        let options = ViewOptions {
            filter: FilterMode::Pending,
            sort: SortMode::Title,
            search: "a".to_string(),
        };

        let first = apply(&tasks, &options);
        let second = apply(&tasks, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let shown = apply(&[], &ViewOptions::default());
        assert!(shown.is_empty());
    }
}
