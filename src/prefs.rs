//! Display-mode preference.
//!
//! The theme lives in its own file, separate from task data, and has no
//! effect on the task sequence. Missing or unreadable state falls back to
//! the default theme.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::Storage;

/// Display theme for presentation surfaces.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// Load the persisted theme, defaulting when absent or unreadable.
pub fn load_theme(storage: &Storage) -> Theme {
    let path = storage.theme_file();
    if !path.exists() {
        return Theme::default();
    }

    match storage.read_json::<ThemeFile>(&path) {
        Ok(file) => file.theme,
        Err(err) => {
            tracing::warn!(
                "unreadable theme preference at {}; using default: {err}",
                path.display()
            );
            Theme::default()
        }
    }
}

/// Persist the theme under its own file.
pub fn save_theme(storage: &Storage, theme: Theme) -> Result<()> {
    storage.init()?;
    storage.write_json(&storage.theme_file(), &ThemeFile { theme })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_to_light() {
        let temp = TempDir::new().expect("tempdir");
        let storage = Storage::new(temp.path().to_path_buf());
        assert_eq!(load_theme(&storage), Theme::Light);
    }

    #[test]
    fn round_trips_dark() {
        let temp = TempDir::new().expect("tempdir");
        let storage = Storage::new(temp.path().to_path_buf());

        save_theme(&storage, Theme::Dark).expect("save");
        assert_eq!(load_theme(&storage), Theme::Dark);
    }

    #[test]
    fn corrupt_file_falls_back_to_default() {
        let temp = TempDir::new().expect("tempdir");
        let storage = Storage::new(temp.path().to_path_buf());
        fs::write(storage.theme_file(), "garbage").expect("write");

        assert_eq!(load_theme(&storage), Theme::Light);
    }

    #[test]
    fn theme_file_is_separate_from_tasks() {
        let temp = TempDir::new().expect("tempdir");
        let storage = Storage::new(temp.path().to_path_buf());

        save_theme(&storage, Theme::Dark).expect("save");
        assert!(storage.theme_file().exists());
        assert!(!storage.tasks_file().exists());
    }
}
