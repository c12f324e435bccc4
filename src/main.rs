//! tick - task list CLI
//!
//! A small CLI for managing a personal task list: add, edit, complete,
//! filter, sort, and search scheduled tasks.

use clap::Parser;
use tick::cli::Cli;
use tick::output;

fn main() {
    init_tracing();

    let command = output::infer_command_name_from_args();
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = cli.run() {
        output::emit_error(&command, &err, json);
        std::process::exit(err.exit_code());
    }
}

/// Install the tracing subscriber on stderr, so diagnostics never mix into
/// parseable stdout. Silent unless the user opts in through RUST_LOG; a
/// filter that fails to parse is treated as unset.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = match std::env::var("RUST_LOG") {
        Ok(raw) if !raw.trim().is_empty() => {
            EnvFilter::try_new(raw.trim()).unwrap_or_else(|_| EnvFilter::new("off"))
        }
        _ => EnvFilter::new("off"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
