//! Version command.

use std::io::Write;

use crate::build_info::BuildInfo;
use crate::Result;

/// Print name, version and build time
pub fn print_version(info: &BuildInfo, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{} version: {}", info.name, info.version)?;
    writeln!(out, "Build time: {}", info.build_time)?;
    Ok(())
}
