//! Structured file system error handling for hydrate
//!
//! This module captures context at the operation site (what was being done,
//! to which path, and why) rather than parsing io error messages after the fact.
//! It covers the root document and the output target; embedded files report
//! their failures through [`HydrateError`](crate::core::HydrateError) variants.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Types of file operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    /// Reading a file completely
    Read,
    /// Writing a file
    Write,
    /// Canonicalizing a path
    Canonicalize,
    /// Creating a directory
    CreateDir,
    /// Renaming a file into place
    Rename,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Read => write!(f, "reading"),
            FileOperation::Write => write!(f, "writing"),
            FileOperation::Canonicalize => write!(f, "resolving path"),
            FileOperation::CreateDir => write!(f, "creating directory"),
            FileOperation::Rename => write!(f, "renaming"),
        }
    }
}

/// File operation error with the context it happened in
#[derive(Error, Debug)]
#[error("Failed {operation} '{}' ({purpose})", file_path.display())]
pub struct FileOperationError {
    /// The type of operation that failed
    pub operation: FileOperation,
    /// The file path that was being accessed
    pub file_path: PathBuf,
    /// Why the file was being accessed
    pub purpose: String,
    /// The underlying IO error
    #[source]
    pub source: std::io::Error,
}

impl FileOperationError {
    /// Create a new file operation error
    pub fn new(
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self {
            operation,
            file_path: file_path.into(),
            purpose: purpose.into(),
            source,
        }
    }

    /// Whether the underlying error means the path does not exist.
    pub fn is_not_found(&self) -> bool {
        self.source.kind() == std::io::ErrorKind::NotFound
    }

    /// Get a user-friendly error message with context
    pub fn user_message(&self) -> String {
        let mut message = format!(
            "Failed {} file '{}' for {}",
            self.operation,
            self.file_path.display(),
            self.purpose
        );

        match self.source.kind() {
            std::io::ErrorKind::NotFound => {
                message.push_str("\n\nThe file does not exist at the specified path.");
            }
            std::io::ErrorKind::PermissionDenied => {
                message.push_str(&format!(
                    "\n\nPermission denied. Check file/directory permissions for: {}",
                    self.file_path.display()
                ));
            }
            std::io::ErrorKind::InvalidData => {
                message.push_str("\n\nThe file contains invalid data or encoding.");
            }
            _ => {
                message.push_str(&format!("\n\nError details: {}", self.source));
            }
        }

        message
    }
}

/// Extension trait for io results to add file operation context
pub trait FileResultExt<T> {
    /// Add file operation context to a Result
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: &Path,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError>;
}

impl<T> FileResultExt<T> for Result<T, std::io::Error> {
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: &Path,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError> {
        self.map_err(|source| FileOperationError::new(operation, file_path, purpose, source))
    }
}
