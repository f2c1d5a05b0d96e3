//! File system utilities
//!
//! - [`atomic`] - temp-and-rename writes for output files
//! - [`paths`] - lexical path normalization

pub mod atomic;
pub mod paths;

pub use atomic::{atomic_write, safe_write};
pub use paths::{absolute_path, normalize_path};
