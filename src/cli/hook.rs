//! Pre-execution hook.
//!
//! Runs after argument parsing and before the selected command's body.
//! Configuration problems are reported and replaced by defaults here; they
//! never abort the invocation.

use console::style;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use super::args::{Cli, Commands};
use super::context::AppContext;
use crate::build_info::NAME;
use crate::config::{load_config, Config, ConfigOrigin, ConfigSource, ResolvedConfig};

/// Build the context for `command`, loading configuration if it needs it.
///
/// Warnings go to `err`; the verbose config-path line goes to `out`. Failing
/// to write either is logged and otherwise ignored.
pub fn prepare_context(
    cli: &Cli,
    command: &Commands,
    source: &dyn ConfigSource,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> AppContext {
    if !command.requires_config() {
        debug!("Skipping config for `{}`", command.name());
        return AppContext::unconfigured(command.name(), cli.verbose);
    }

    let (path, loaded) = load_config(source, cli.config_path(), NAME);
    let resolved = match loaded {
        Ok(config) => {
            debug!("Config loaded: {:?}", config);
            ResolvedConfig {
                config,
                path,
                origin: ConfigOrigin::File,
            }
        }
        Err(e) => {
            if let Err(write_err) = writeln!(
                err,
                "{} Failed to load config: {}",
                style("Warning:").for_stderr().yellow().bold(),
                e
            ) {
                debug!("Could not write config warning: {}", write_err);
            }
            ResolvedConfig {
                config: Config::default(),
                path,
                origin: ConfigOrigin::Default,
            }
        }
    };

    if cli.verbose {
        let line = format!("Using config file: {}", display_path(resolved.path.as_deref()));
        if let Err(write_err) = writeln!(out, "{}", line) {
            debug!("Could not write config path: {}", write_err);
        }
    }

    if !resolved.config.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    AppContext::configured(command.name(), cli.verbose, resolved)
}

/// Render an optional config path for users
pub fn display_path(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<none>".to_string(),
    }
}
