//! Command-line interface for tick
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is implemented in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::prefs::Theme;
use crate::storage::Storage;
use crate::task::TaskStore;
use crate::view::{FilterMode, SortMode};

mod add;
mod edit;
mod list;
mod rm;
mod show;
mod theme;
mod toggle;

/// tick - a local task list
///
/// Create, edit, complete, and browse small scheduled tasks from the
/// terminal. State lives as a single JSON document in the user data
/// directory and is saved after every change.
#[derive(Parser, Debug)]
#[command(name = "tick")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the data directory (defaults to the platform data dir)
    #[arg(long, global = true, env = "TICK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Free-form description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Scheduled date/time, e.g. 2024-01-01T10:00 (defaults to now)
        #[arg(long, value_name = "DATETIME")]
        at: Option<String>,
    },

    /// Edit fields of a task
    Edit {
        /// Task id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New scheduled date/time
        #[arg(long, value_name = "DATETIME")]
        at: Option<String>,

        /// Set completion directly instead of toggling
        #[arg(long, value_name = "BOOL")]
        completed: Option<bool>,
    },

    /// Remove a task
    Rm {
        /// Task id
        id: String,
    },

    /// Toggle completion of a task
    Toggle {
        /// Task id
        id: String,
    },

    /// Show one task in full
    Show {
        /// Task id
        id: String,
    },

    /// List tasks with filtering, sorting, and search
    List {
        /// Completion filter
        #[arg(long, value_enum)]
        filter: Option<FilterMode>,

        /// Sort key
        #[arg(long, value_enum)]
        sort: Option<SortMode>,

        /// Case-insensitive title search
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Show or set the display theme
    Theme {
        /// Theme to set (shows the current theme when omitted)
        #[arg(value_enum)]
        value: Option<Theme>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let Cli {
            data_dir,
            json,
            quiet,
            command,
        } = self;

        match command {
            Commands::Add {
                title,
                description,
                at,
            } => add::run(add::AddOptions {
                title,
                description,
                at,
                data_dir,
                json,
                quiet,
            }),
            Commands::Edit {
                id,
                title,
                description,
                at,
                completed,
            } => edit::run(edit::EditOptions {
                id,
                title,
                description,
                at,
                completed,
                data_dir,
                json,
                quiet,
            }),
            Commands::Rm { id } => rm::run(rm::RmOptions {
                id,
                data_dir,
                json,
                quiet,
            }),
            Commands::Toggle { id } => toggle::run(toggle::ToggleOptions {
                id,
                data_dir,
                json,
                quiet,
            }),
            Commands::Show { id } => show::run(show::ShowOptions {
                id,
                data_dir,
                json,
                quiet,
            }),
            Commands::List {
                filter,
                sort,
                search,
            } => list::run(list::ListOptions {
                filter,
                sort,
                search,
                data_dir,
                json,
                quiet,
            }),
            Commands::Theme { value } => theme::run(theme::ThemeOptions {
                value,
                data_dir,
                json,
                quiet,
            }),
        }
    }
}

/// Resolve storage and load the task store for a command.
fn open_store(data_dir: Option<PathBuf>) -> Result<(Storage, TaskStore)> {
    let storage = Storage::resolve(data_dir)?;
    let store = TaskStore::open(storage.clone());
    Ok((storage, store))
}
