//! Configuration management for mycli.
//!
//! This module locates and parses the YAML configuration file. Loading is
//! best effort at the command layer: callers decide what to do with errors,
//! and [`load_config`] always reports which path it tried.

use crate::error::MycliError;
use crate::Result;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Rendering format for commands that print structured data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Use styled terminal output
    pub color: bool,
    /// Format used when printing structured data
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Parse configuration from YAML text.
    ///
    /// Keys missing from the document take their default value. An empty
    /// document yields the default configuration.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    File,
    Default,
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOrigin::File => write!(f, "file"),
            ConfigOrigin::Default => write!(f, "default"),
        }
    }
}

/// Configuration as resolved for a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub config: Config,
    /// Path that was tried, if one could be determined
    pub path: Option<PathBuf>,
    pub origin: ConfigOrigin,
}

/// Locates and reads configuration files.
///
/// The command layer only talks to this trait, so tests can substitute a
/// source that never touches the filesystem.
pub trait ConfigSource {
    /// Path to read for this invocation. An explicit path is returned as is.
    fn locate(&self, explicit: Option<&Path>, app_name: &str) -> Result<PathBuf>;

    /// Read and parse the configuration stored at `path`.
    fn read(&self, path: &Path) -> Result<Config>;
}

/// Reads `$HOME/.<name>.yaml` or an explicitly given file
#[derive(Debug, Default, Clone, Copy)]
pub struct FileConfigSource;

impl FileConfigSource {
    /// Default location for an application's configuration file
    pub fn default_path(app_name: &str) -> Result<PathBuf> {
        let base_dirs = BaseDirs::new().ok_or_else(|| {
            MycliError::Config("Failed to determine home directory".to_string())
        })?;

        Ok(base_dirs.home_dir().join(format!(".{}.yaml", app_name)))
    }
}

impl ConfigSource for FileConfigSource {
    fn locate(&self, explicit: Option<&Path>, app_name: &str) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(app_name),
        }
    }

    fn read(&self, path: &Path) -> Result<Config> {
        debug!("Loading config from: {:?}", path);

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => MycliError::ConfigNotFound(path.to_path_buf()),
            _ => MycliError::ConfigFile {
                message: "Failed to read config file".to_string(),
                path: path.to_path_buf(),
                source: e.into(),
            },
        })?;

        Config::from_yaml(&content).map_err(|e| MycliError::ConfigFile {
            message: "Failed to parse config file".to_string(),
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

/// Locate and read the configuration for `app_name`.
///
/// Returns the path that was tried alongside the outcome, so callers can
/// report it even when loading failed.
pub fn load_config(
    source: &dyn ConfigSource,
    explicit: Option<&Path>,
    app_name: &str,
) -> (Option<PathBuf>, Result<Config>) {
    let path = match source.locate(explicit, app_name) {
        Ok(path) => path,
        Err(e) => return (None, Err(e)),
    };
    let config = source.read(&path);
    (Some(path), config)
}
