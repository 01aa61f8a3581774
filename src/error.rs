//! Error types for the mycli application.
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for mycli operations
#[derive(Debug, Error)]
pub enum MycliError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
    /// No configuration file at the resolved location
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
    /// Configuration file errors
    #[error("{message} (configuration file path: {path}): {source}")]
    ConfigFile {
        /// Error message
        message: String,
        /// Path to the configuration file
        path: PathBuf,
        /// Source of the error
        source: anyhow::Error,
    },
    /// A command asked for configuration it was not registered to receive
    #[error("command `{0}` does not load configuration")]
    ConfigUnavailable(&'static str),
    /// IO operation errors
    #[error("IO error: {0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for MycliError {
    fn from(err: std::io::Error) -> Self {
        MycliError::Io(err)
    }
}
