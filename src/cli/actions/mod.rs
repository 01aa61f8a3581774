//! Command bodies.
//!
//! One module per subcommand:
//! - version: build identity
//! - completion: shell completion scripts
//! - config: inspect the loaded configuration

mod completion;
mod config;
mod version;

pub use completion::print_completion;
pub use config::run_config;
pub use version::print_version;
