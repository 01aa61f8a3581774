//! mycli is a CLI tool that helps you manage resources.
//!
//! This is the main entry point that parses arguments, sets up logging and
//! hands off to the command dispatcher.

use clap::Parser;
use console::style;
use mycli::cli::{self, Cli};
use mycli::FileConfigSource;
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli_args = Cli::parse();

    // Initialize logging with appropriate level
    let level_string = if cli_args.verbose {
        "mycli=debug"
    } else {
        "mycli=info"
    };
    let filter =
        EnvFilter::try_from_env("MYCLI_LOG").unwrap_or_else(|_| EnvFilter::new(level_string));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!("Logging initialized");

    match cli::run(cli_args, &FileConfigSource, &mut io::stdout(), &mut io::stderr()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").for_stderr().red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
