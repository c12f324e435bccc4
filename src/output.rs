//! Output emission for tick commands.
//!
//! Each command builds a [`Report`] describing its result for humans and
//! hands it the serializable payload; the report then prints either a
//! stable JSON envelope (`--json`) or a short text block:
//!
//! ```text
//! Task added
//!   id: 01HV3Q0XNCW9
//!   title: Buy milk
//! ```

use serde::Serialize;

use crate::error::{exit_codes, Error, Result};

/// Version tag carried by every JSON envelope.
pub const SCHEMA_VERSION: &str = "tick.v1";

/// Rendering switches shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

/// Human-readable result of one command: a headline, indented
/// `name: value` fields, free-form rows (one per task in listings), and at
/// most one trailing hint.
#[derive(Debug, Clone)]
pub struct Report {
    headline: String,
    fields: Vec<(&'static str, String)>,
    rows: Vec<String>,
    hint: Option<String>,
}

impl Report {
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            fields: Vec::new(),
            rows: Vec::new(),
            hint: None,
        }
    }

    pub fn field(&mut self, name: &'static str, value: impl Into<String>) {
        self.fields.push((name, value.into()));
    }

    pub fn row(&mut self, value: impl Into<String>) {
        self.rows.push(value.into());
    }

    pub fn hint(&mut self, value: impl Into<String>) {
        self.hint = Some(value.into());
    }

    /// Render the text block: headline, then fields indented two spaces,
    /// then rows after a blank line, then the hint after another.
    pub fn render(&self) -> String {
        let mut out = self.headline.clone();

        for (name, value) in &self.fields {
            out.push_str("\n  ");
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
        }

        if !self.rows.is_empty() {
            out.push('\n');
            for row in &self.rows {
                out.push('\n');
                out.push_str(row);
            }
        }

        if let Some(hint) = &self.hint {
            out.push_str("\n\nhint: ");
            out.push_str(hint);
        }

        out
    }

    /// Print this result: the JSON envelope around `data` in `--json` mode,
    /// the rendered text block otherwise, nothing under `--quiet`.
    pub fn emit<T: Serialize>(
        &self,
        options: OutputOptions,
        command: &str,
        data: &T,
    ) -> Result<()> {
        if options.json {
            let payload = Success {
                schema_version: SCHEMA_VERSION,
                command,
                status: "success",
                data,
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else if !options.quiet {
            println!("{}", self.render());
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct Success<'a, T> {
    schema_version: &'static str,
    command: &'a str,
    status: &'static str,
    data: &'a T,
}

#[derive(Serialize)]
struct Failure<'a> {
    schema_version: &'static str,
    command: &'a str,
    status: &'static str,
    error: ErrorBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'static str>,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    code: i32,
    kind: &'static str,
}

/// Print a command failure: a JSON envelope on stdout in `--json` mode,
/// otherwise `error:`/`hint:` lines on stderr.
pub fn emit_error(command: &str, err: &Error, json: bool) {
    let hint = error_hint(err);

    if !json {
        eprintln!("error: {err}");
        if let Some(hint) = hint {
            eprintln!("hint: {hint}");
        }
        return;
    }

    let payload = Failure {
        schema_version: SCHEMA_VERSION,
        command,
        status: "error",
        error: ErrorBody {
            message: err.to_string(),
            code: err.exit_code(),
            kind: error_kind(err),
        },
        hint,
    };

    match serde_json::to_string_pretty(&payload) {
        Ok(rendered) => println!("{rendered}"),
        Err(_) => eprintln!("error: {err}"),
    }
}

/// First non-flag argument, used to label the error envelope even when
/// parsing fails.
pub fn infer_command_name_from_args() -> String {
    std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .unwrap_or_else(|| "tick".to_string())
}

fn error_kind(err: &Error) -> &'static str {
    if err.exit_code() == exit_codes::USER_ERROR {
        "user_error"
    } else {
        "operation_failed"
    }
}

fn error_hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::TaskNotFound(_) => Some("run `tick list` to see known ids"),
        Error::TomlParse(_) => Some("check config.toml in the data directory"),
        _ => None,
    }
}
