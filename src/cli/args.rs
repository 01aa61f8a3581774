//! Command line argument parsing for mycli.
//!
//! This module defines the command tree and global flags using the clap
//! crate. Every subcommand declares whether it needs configuration loaded
//! before it runs.

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};

use crate::build_info;

/// Command line arguments for mycli
#[derive(Parser, Debug)]
#[command(
    name = "mycli",
    version = build_info::root_version(),
    about = "mycli is a CLI tool",
    long_about = "mycli is a powerful CLI tool that helps you manage resources."
)]
pub struct Cli {
    /// Config file (default is $HOME/.mycli.yaml)
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Explicit config path, if one was given. An empty value means the
    /// default location.
    pub fn config_path(&self) -> Option<&Path> {
        self.config
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the version information
    #[command(long_about = "Print detailed version information about this build")]
    Version,

    /// Generate a shell completion script
    Completion {
        /// Shell to generate the script for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Inspect the loaded configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the configuration file in use and where the values came from
    Path,
}

impl Commands {
    /// Name the command was registered under
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Version => "version",
            Commands::Completion { .. } => "completion",
            Commands::Config(_) => "config",
        }
    }

    /// Whether configuration must be loaded before this command runs.
    ///
    /// Informational commands work without any configuration present.
    pub fn requires_config(&self) -> bool {
        match self {
            Commands::Version => false,
            Commands::Completion { .. } => false,
            Commands::Config(_) => true,
        }
    }
}
