//! Per-invocation state handed to command bodies.

use crate::config::ResolvedConfig;
use crate::error::MycliError;
use crate::Result;

/// Everything a command body may read about the current invocation
#[derive(Debug, Clone)]
pub struct AppContext {
    command: &'static str,
    verbose: bool,
    resolved: Option<ResolvedConfig>,
}

impl AppContext {
    /// Context for a command that runs without configuration
    pub fn unconfigured(command: &'static str, verbose: bool) -> Self {
        Self {
            command,
            verbose,
            resolved: None,
        }
    }

    /// Context carrying the configuration resolved for this invocation
    pub fn configured(command: &'static str, verbose: bool, resolved: ResolvedConfig) -> Self {
        Self {
            command,
            verbose,
            resolved: Some(resolved),
        }
    }

    pub fn command(&self) -> &'static str {
        self.command
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Resolved configuration, or an error if the command was not registered
    /// as needing it
    pub fn config(&self) -> Result<&ResolvedConfig> {
        self.resolved
            .as_ref()
            .ok_or(MycliError::ConfigUnavailable(self.command))
    }
}
