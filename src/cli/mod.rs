//! CLI interface for mycli.
//!
//! This module provides the command-line interface components,
//! organized into submodules for different concerns:
//! - args: Command line argument parsing and the command tree
//! - hook: Configuration loading before a command runs
//! - context: State passed to command bodies
//! - actions: The command bodies themselves

pub mod actions;
pub mod args;
pub mod context;
pub mod hook;

use clap::CommandFactory;
use std::io::Write;
use tracing::debug;

use crate::build_info::BUILD_INFO;
use crate::config::ConfigSource;
use crate::Result;

// Re-export commonly used types
pub use args::{Cli, Commands, ConfigCommand};
pub use context::AppContext;

/// Execute the parsed command line.
///
/// Without a subcommand the root help is printed. Errors from command bodies
/// are returned unchanged.
pub fn run(
    cli: Cli,
    source: &dyn ConfigSource,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let Some(command) = cli.command.clone() else {
        debug!("No subcommand given, printing help");
        Cli::command().write_long_help(&mut &mut *out)?;
        return Ok(());
    };

    let ctx = hook::prepare_context(&cli, &command, source, out, err);
    debug!("Running `{}`", ctx.command());

    match command {
        Commands::Version => actions::print_version(&BUILD_INFO, out),
        Commands::Completion { shell } => actions::print_completion(shell, out),
        Commands::Config(cmd) => actions::run_config(cmd, &ctx, out),
    }
}
