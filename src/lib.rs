//! mycli is a CLI tool that helps you manage resources.
//!
//! This library provides:
//! - The command tree and global flags
//! - Best-effort configuration loading with a default fallback
//! - Build identity embedded at compile time

pub mod build_info;
pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use build_info::{BuildInfo, BUILD_INFO, NAME};
pub use cli::{AppContext, Cli, Commands};
pub use config::{Config, ConfigSource, FileConfigSource};
pub use error::MycliError;
pub type Result<T> = std::result::Result<T, MycliError>;
