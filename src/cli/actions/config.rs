//! Config command.
//!
//! Shows what the pre-execution hook resolved for this invocation.

use std::io::Write;

use crate::cli::args::ConfigCommand;
use crate::cli::context::AppContext;
use crate::cli::hook::display_path;
use crate::config::{Config, OutputFormat};
use crate::error::MycliError;
use crate::Result;

/// Run a `config` subcommand against the context's configuration
pub fn run_config(cmd: ConfigCommand, ctx: &AppContext, out: &mut dyn Write) -> Result<()> {
    let resolved = ctx.config()?;
    match cmd {
        ConfigCommand::Show => show(&resolved.config, out),
        ConfigCommand::Path => {
            writeln!(
                out,
                "{} ({})",
                display_path(resolved.path.as_deref()),
                resolved.origin
            )?;
            Ok(())
        }
    }
}

fn show(config: &Config, out: &mut dyn Write) -> Result<()> {
    match config.output {
        OutputFormat::Text => {
            writeln!(out, "color: {}", config.color)?;
            writeln!(out, "output: {}", config.output)?;
        }
        OutputFormat::Yaml => {
            let content = serde_yaml::to_string(config)
                .map_err(|e| MycliError::Config(format!("Failed to serialize config: {}", e)))?;
            write!(out, "{}", content)?;
        }
    }
    Ok(())
}
