//! tick theme command implementation.

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{OutputOptions, Report};
use crate::prefs::{self, Theme};
use crate::storage::Storage;

pub struct ThemeOptions {
    pub value: Option<Theme>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ThemeOutput {
    theme: Theme,
}

pub fn run(options: ThemeOptions) -> Result<()> {
    let storage = Storage::resolve(options.data_dir)?;

    let (headline, theme) = match options.value {
        Some(theme) => {
            prefs::save_theme(&storage, theme)?;
            ("Theme set", theme)
        }
        None => ("Theme", prefs::load_theme(&storage)),
    };

    let mut report = Report::new(headline);
    report.field("theme", theme.to_string());

    report.emit(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "theme",
        &ThemeOutput { theme },
    )
}
