//! Cross-cutting utilities shared by the CLI and the hydration engine.

pub mod fs;

pub use fs::{absolute_path, atomic_write, normalize_path, safe_write};
