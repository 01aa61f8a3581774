//! Build identity embedded at compile time.
//!
//! Release pipelines set `MYCLI_VERSION` and `MYCLI_BUILD_TIME` in the
//! environment of `cargo build`; local builds fall back to `dev`/`unknown`.

use std::sync::OnceLock;

/// Application name, also the root command name
pub const NAME: &str = "mycli";

/// Name, version and build timestamp of this binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_time: &'static str,
}

/// Build info for the running binary
pub const BUILD_INFO: BuildInfo = BuildInfo {
    name: NAME,
    version: match option_env!("MYCLI_VERSION") {
        Some(version) => version,
        None => "dev",
    },
    build_time: match option_env!("MYCLI_BUILD_TIME") {
        Some(build_time) => build_time,
        None => "unknown",
    },
};

impl BuildInfo {
    /// Version string shown by `--version`, e.g. `dev (built at unknown)`
    pub fn long_version(&self) -> String {
        format!("{} (built at {})", self.version, self.build_time)
    }
}

/// [`BUILD_INFO`]'s long version, computed once for the root command
pub fn root_version() -> &'static str {
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| BUILD_INFO.long_version())
}
