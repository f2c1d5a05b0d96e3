//! Error handling for hydrate
//!
//! The error system follows two rules:
//! 1. **Strongly-typed errors** so library callers can match on every failure mode
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`HydrateError`] - closed set of everything that can abort a hydration
//! - [`ErrorContext`] - wrapper that adds details and a suggestion for display
//!
//! Every [`HydrateError`] is terminal. The engine never recovers locally and
//! never substitutes placeholder text for a failed embed; the first failure
//! anywhere in the embed tree aborts the whole call.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hydrate_cli::core::{HydrateError, user_friendly_error};
//! use std::path::Path;
//!
//! match hydrate_cli::hydrate::hydrate_file(Path::new("README.md"), 5) {
//!     Ok(text) => println!("{text}"),
//!     Err(HydrateError::CircularReference { chain }) => {
//!         eprintln!("loop through {} files", chain.len());
//!     }
//!     Err(e) => user_friendly_error(e.into()).display(),
//! }
//! ```

use crate::core::file_error::FileOperationError;
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for hydrate operations
///
/// Each variant carries the structured data needed to explain the failure,
/// so callers can match exhaustively instead of inspecting messages.
///
/// ## Hydration
/// - [`CircularReference`](HydrateError::CircularReference) - a file embeds itself, directly or transitively
/// - [`MissingFile`](HydrateError::MissingFile) - an embed points at nothing readable
/// - [`MaxDepthExceeded`](HydrateError::MaxDepthExceeded) - the embed chain is too deep
/// - [`BinaryFile`](HydrateError::BinaryFile) - an embed (or the root) is not text
/// - [`MalformedInput`](HydrateError::MalformedInput) - a table file has an unparseable line
///
/// ## Entry point and output
/// - [`InputNotFound`](HydrateError::InputNotFound) - the root document does not exist
/// - [`OutputExists`](HydrateError::OutputExists) - refusing to overwrite an unrelated file
/// - [`FileOperation`](HydrateError::FileOperation) - any other I/O failure on root or output
#[derive(Error, Debug)]
pub enum HydrateError {
    /// A canonical path was reached that is already part of the current embed chain.
    ///
    /// The chain lists ancestors in visitation order, followed by the path that
    /// closed the loop. It is not necessarily the shortest cycle.
    #[error("Circular reference detected: {}", format_chain(chain))]
    CircularReference {
        /// Visited chain plus the offending path
        chain: Vec<PathBuf>,
    },

    /// An embed marker references a file that does not exist or cannot be read.
    #[error(
        "Missing embedded file '{reference}' (resolved to {}, referenced in {})",
        absolute_path.display(),
        referenced_in.display()
    )]
    MissingFile {
        /// Resolved absolute path of the reference
        absolute_path: PathBuf,
        /// The trimmed reference text from the marker
        reference: String,
        /// Base directory of the document containing the marker
        referenced_in: PathBuf,
    },

    /// The next embed would exceed the configured depth ceiling.
    #[error("Maximum embedding depth ({max_depth}) exceeded at: {}", path.display())]
    MaxDepthExceeded {
        /// The configured limit
        max_depth: usize,
        /// Path that would have been embedded next
        path: PathBuf,
    },

    /// A NUL byte in the first 8 KiB, or the content is not valid UTF-8.
    #[error("Cannot embed binary file: {}", path.display())]
    BinaryFile {
        /// Offending file
        path: PathBuf,
    },

    /// A line of a CSV, TSV or JSONL file cannot be parsed.
    #[error("Malformed input in {} at line {line_number}: {reason}", path.display())]
    MalformedInput {
        /// File being converted
        path: PathBuf,
        /// 1-based line number in the converted file
        line_number: usize,
        /// The offending line, trimmed
        line: String,
        /// Parser message
        reason: String,
    },

    /// The output path exists and is not the input path.
    #[error("Output file already exists: {}", path.display())]
    OutputExists {
        /// The conflicting output path
        path: PathBuf,
    },

    /// The root document does not exist.
    #[error("Input file not found: {}", path.display())]
    InputNotFound {
        /// Path as given by the caller
        path: PathBuf,
    },

    /// Any other I/O failure on the root document or the output target.
    #[error(transparent)]
    FileOperation(#[from] FileOperationError),
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(" -> ")
}

impl HydrateError {
    /// The path most relevant to this error.
    pub fn path(&self) -> Option<&Path> {
        match self {
            HydrateError::CircularReference {
                chain,
            } => chain.last().map(PathBuf::as_path),
            HydrateError::MissingFile {
                absolute_path,
                ..
            } => Some(absolute_path.as_path()),
            HydrateError::MaxDepthExceeded {
                path,
                ..
            }
            | HydrateError::BinaryFile {
                path,
            }
            | HydrateError::MalformedInput {
                path,
                ..
            }
            | HydrateError::OutputExists {
                path,
            }
            | HydrateError::InputNotFound {
                path,
            } => Some(path.as_path()),
            HydrateError::FileOperation(e) => Some(e.file_path.as_path()),
        }
    }
}

/// Error context wrapper that adds details and a suggestion to an error message
///
/// Constructed by [`user_friendly_error`] in the binary, or manually:
///
/// ```rust,no_run
/// use hydrate_cli::core::ErrorContext;
///
/// let context = ErrorContext::new("Output file already exists: out.md")
///     .with_suggestion("Pick a different output path")
///     .with_details("hydrate never overwrites files other than its input");
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// One-line error message
    pub message: String,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from anything displayable
    #[must_use]
    pub fn new(message: impl fmt::Display) -> Self {
        Self {
            message: message.to_string(),
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.message);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Convert any error into a user-friendly [`ErrorContext`]
///
/// Walks the error chain looking for a [`HydrateError`] (possibly wrapped in
/// anyhow context) and attaches variant-specific details and suggestions.
/// Anything else is shown with its full context chain.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let mut current: &dyn std::error::Error = error.as_ref();
    loop {
        if let Some(hydrate_error) = current.downcast_ref::<HydrateError>() {
            return create_error_context(hydrate_error);
        }
        if let Some(file_error) = current.downcast_ref::<FileOperationError>() {
            return ErrorContext::new(file_error)
                .with_details(file_error.user_message())
                .with_suggestion("Check that the path exists and you have the necessary permissions");
        }

        match current.source() {
            Some(source) => current = source,
            None => break,
        }
    }

    let context = ErrorContext::new(&error);
    let causes: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    if causes.is_empty() {
        context
    } else {
        context.with_details(causes.join(": "))
    }
}

fn create_error_context(error: &HydrateError) -> ErrorContext {
    match error {
        HydrateError::CircularReference {
            chain,
        } => ErrorContext::new(error)
            .with_details(format!("Embed chain ({} files):\n  {}", chain.len(), format_chain(chain)))
            .with_suggestion("Remove one of the embed markers that closes the loop"),
        HydrateError::MissingFile {
            referenced_in,
            ..
        } => ErrorContext::new(error)
            .with_details(format!(
                "Relative references resolve against the directory of the file containing them ({})",
                referenced_in.display()
            ))
            .with_suggestion("Check the path inside the {{ }} marker; file names are case-sensitive"),
        HydrateError::MaxDepthExceeded {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Raise the limit with --max-depth or flatten the embed chain"),
        HydrateError::BinaryFile {
            ..
        } => ErrorContext::new(error)
            .with_details("Only UTF-8 text without NUL bytes can be embedded")
            .with_suggestion("Reference a text rendition of the file instead"),
        HydrateError::MalformedInput {
            line,
            ..
        } => ErrorContext::new(error)
            .with_details(format!("Offending line: {line}"))
            .with_suggestion("Fix the offending line; in .jsonl files every non-blank line must be a JSON object"),
        HydrateError::OutputExists {
            ..
        } => ErrorContext::new(error).with_suggestion(
            "Use the same path for input and output to update in place, or choose a new output path",
        ),
        HydrateError::InputNotFound {
            ..
        } => ErrorContext::new(error).with_suggestion("Check the input path and try again"),
        HydrateError::FileOperation(file_error) => ErrorContext::new(error)
            .with_details(file_error.user_message())
            .with_suggestion("Check that the path exists and you have the necessary permissions"),
    }
}
