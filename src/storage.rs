//! Storage layer for tick
//!
//! All state lives in a single data directory:
//!
//! ```text
//! <data-dir>/
//!   tasks.json    # Full task sequence, one JSON document
//!   theme.json    # Display-mode preference (independent of task data)
//!   config.toml   # Optional defaults for the list view
//! ```
//!
//! The default data directory is the platform one for the application;
//! `--data-dir` or `TICK_DATA_DIR` overrides it.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// File holding the full task sequence
pub const TASKS_FILE: &str = "tasks.json";

/// File holding the display-mode preference
pub const THEME_FILE: &str = "theme.json";

/// Optional configuration file
pub const CONFIG_FILE: &str = "config.toml";

/// Storage manager for tick state
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    /// Create a storage manager rooted at the given directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Resolve the data directory: an explicit override wins, otherwise the
    /// platform data directory for the application.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = override_dir {
            return Ok(Self::new(dir));
        }

        let dirs = ProjectDirs::from("", "", "tick").ok_or_else(|| {
            Error::DataDirUnavailable("no home directory for this user".to_string())
        })?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    // =========================================================================
    // Path accessors
    // =========================================================================

    /// Root data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path to the task sequence file
    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir.join(TASKS_FILE)
    }

    /// Path to the theme preference file
    pub fn theme_file(&self) -> PathBuf {
        self.data_dir.join(THEME_FILE)
    }

    /// Path to the optional configuration file
    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    /// Create the data directory if it does not exist
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    // =========================================================================
    // File I/O helpers (atomic writes for safety)
    // =========================================================================

    /// Read JSON data from a file
    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        let data: T = serde_json::from_str(&content)?;
        Ok(data)
    }

    /// Write JSON data atomically (write to temp, then rename)
    ///
    /// This ensures that concurrent readers never see partial writes.
    pub fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        self.write_atomic(path, json.as_bytes())
    }

    /// Write data atomically using temp file + rename
    pub fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create temp file in same directory (for atomic rename)
        let temp_path = path.with_extension("tmp");

        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;

        // Atomic rename
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}
