//! Configuration for hydrate
//!
//! Hydrate reads one optional, user-wide TOML file. Every key has a default,
//! so a missing file is the same as an empty one.
//!
//! # Location
//!
//! The first of these that is set wins:
//!
//! 1. `--config PATH` on the command line
//! 2. The `HYDRATE_CONFIG` environment variable
//! 3. `~/.hydrate/config.toml`
//!
//! # Format
//!
//! ```toml
//! # Maximum embedding depth when --max-depth is not given
//! max_depth = 8
//! ```
//!
//! Command-line flags always take precedence over the file.

mod global;

pub use global::GlobalConfig;
