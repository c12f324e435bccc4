//! Task model and persistent store.
//!
//! The full task sequence lives in memory and is flushed to `tasks.json`
//! after every mutation. Startup reads are lenient: a missing or corrupt
//! file yields an empty list and never fails the process.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::Result;
use crate::storage::Storage;

const TASKS_SCHEMA_VERSION: &str = "tick.tasks.v1";

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub datetime: NaiveDateTime,
    pub completed: bool,
}

/// Partial update for a task: present fields override, absent fields
/// preserve. A title that is blank after trimming is ignored so that every
/// stored task keeps a non-empty title.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub datetime: Option<NaiveDateTime>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.datetime.is_none()
            && self.completed.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TaskFile {
    schema_version: String,
    tasks: Vec<Task>,
}

impl TaskFile {
    fn new(tasks: Vec<Task>) -> Self {
        Self {
            schema_version: TASKS_SCHEMA_VERSION.to_string(),
            tasks,
        }
    }
}

/// Owner of the authoritative task sequence.
///
/// Creation appends; update, toggle, and remove preserve the relative order
/// of the remaining tasks. Every mutator persists the full sequence before
/// returning. Operations addressing a task by id are total: an unknown id is
/// reported through the return value, never as an error.
#[derive(Debug)]
pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load the store from the storage layer's task file.
    pub fn open(storage: Storage) -> Self {
        let tasks = load_tasks(&storage);
        Self { storage, tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Append a new pending task and persist.
    ///
    /// A title that is blank after trimming is rejected silently: the store
    /// is left untouched and `None` is returned.
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        datetime: NaiveDateTime,
    ) -> Result<Option<&Task>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        self.tasks.push(Task {
            id: Ulid::new().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            datetime,
            completed: false,
        });
        self.persist()?;
        Ok(self.tasks.last())
    }

    /// Apply a partial update to the task with the given id and persist.
    ///
    /// Returns `false` without touching the store when no task matches.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };

        if let Some(title) = patch.title {
            let trimmed = title.trim();
            if !trimmed.is_empty() {
                task.title = trimmed.to_string();
            }
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(datetime) = patch.datetime {
            task.datetime = datetime;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }

        self.persist()?;
        Ok(true)
    }

    /// Remove the task with the given id and persist.
    ///
    /// Returns the removed task, or `None` when no task matches.
    pub fn remove(&mut self, id: &str) -> Result<Option<Task>> {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            return Ok(None);
        };

        let removed = self.tasks.remove(index);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Flip completion of the task with the given id and persist.
    ///
    /// Returns the new completion value, or `None` when no task matches.
    pub fn toggle(&mut self, id: &str) -> Result<Option<bool>> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };

        task.completed = !task.completed;
        let completed = task.completed;
        self.persist()?;
        Ok(Some(completed))
    }

    fn persist(&self) -> Result<()> {
        self.storage.init()?;
        self.storage
            .write_json(&self.storage.tasks_file(), &TaskFile::new(self.tasks.clone()))
    }
}

fn load_tasks(storage: &Storage) -> Vec<Task> {
    let path = storage.tasks_file();
    if !path.exists() {
        return Vec::new();
    }

    match storage.read_json::<TaskFile>(&path) {
        Ok(file) => file.tasks,
        Err(err) => {
            tracing::warn!(
                "unreadable task state at {}; starting empty: {err}",
                path.display()
            );
            Vec::new()
        }
    }
}
