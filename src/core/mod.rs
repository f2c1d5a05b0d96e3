//! Core types and error handling for hydrate
//!
//! - [`error`] - [`HydrateError`], the closed error taxonomy, plus [`ErrorContext`]
//!   and [`user_friendly_error`] for CLI presentation
//! - [`file_error`] - [`FileOperationError`] capturing what/where/why for I/O failures

pub mod error;
pub mod file_error;

pub use error::{ErrorContext, HydrateError, user_friendly_error};
pub use file_error::{FileOperation, FileOperationError, FileResultExt};
