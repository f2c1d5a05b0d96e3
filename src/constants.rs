//! Global constants used throughout the hydrate codebase.
//!
//! Recursion limits, binary sniffing parameters, and the handful of names the
//! CLI and configuration layers agree on live here so they are not repeated
//! as magic values.

/// Default recursion ceiling when hydrating raw content.
///
/// Used by [`crate::hydrate::hydrate_content`] and [`crate::hydrate::Hydrator::new`].
pub const DEFAULT_CONTENT_MAX_DEPTH: usize = 10;

/// Default recursion ceiling for the command line.
///
/// Deliberately lower than [`DEFAULT_CONTENT_MAX_DEPTH`]; it can be changed
/// with `--max-depth` or the `max_depth` key in the config file.
pub const DEFAULT_CLI_MAX_DEPTH: usize = 5;

/// Number of leading bytes inspected for NUL bytes when detecting binary files.
pub const BINARY_SNIFF_LEN: usize = 8192;

/// Output path that means "write to stdout".
pub const STDOUT_PATH: &str = "-";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "HYDRATE_CONFIG";

/// Directory under the home directory holding the config file.
pub const CONFIG_DIR_NAME: &str = ".hydrate";

/// File name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
