//! Shell completion scripts.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

use crate::build_info::NAME;
use crate::cli::Cli;
use crate::Result;

/// Write the completion script for `shell` covering the whole command tree
pub fn print_completion(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, NAME, out);
    out.flush()?;
    Ok(())
}
