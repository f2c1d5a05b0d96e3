//! Tabular file conversion to markdown tables.
//!
//! Embedded files whose extension names a tabular format are rendered as
//! GitHub-flavored markdown tables before they are spliced into the parent
//! document. Everything here is pure: no I/O, no global state.
//!
//! # Supported Formats
//!
//! | Extension | Format | Converter |
//! |-----------|--------|-----------|
//! | `.csv`    | comma-separated values | [`convert_csv`] |
//! | `.tsv`    | tab-separated values   | [`convert_tsv`] |
//! | `.jsonl`  | one JSON object per line | [`convert_jsonl`] |
//!
//! Extensions are matched case-insensitively. Any other file passes through
//! unchanged.
//!
//! # Output Shape
//!
//! ```text
//! | name | value |
//! | --- | --- |
//! | foo | 1 |
//! ```
//!
//! Lines are joined with `\n` with no trailing newline, and `|` inside a cell
//! is written as `\|`.

mod delimited;
mod jsonl;
mod table;

pub use delimited::{convert_csv, convert_delimited, convert_tsv};
pub use jsonl::{cell_text, convert_jsonl};
pub use table::{escape_pipe, to_markdown_table};

use crate::core::HydrateError;
use std::path::Path;
use thiserror::Error;

/// A line of tabular input that cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_number}: {reason}")]
pub struct MalformedLine {
    /// 1-based line number in the converted file
    pub line_number: usize,
    /// The trimmed line
    pub line: String,
    /// Why it was rejected
    pub reason: String,
}

impl MalformedLine {
    pub(crate) fn new(line_number: usize, line: &str, reason: impl Into<String>) -> Self {
        Self {
            line_number,
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

/// Tabular formats recognized by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// `.csv`
    Csv,
    /// `.tsv`
    Tsv,
    /// `.jsonl`
    JsonLines,
}

impl TableFormat {
    /// Detect the format from a path's extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            "jsonl" => Some(Self::JsonLines),
            _ => None,
        }
    }

    /// Convert content in this format to a markdown table.
    pub fn convert(self, content: &str) -> Result<String, MalformedLine> {
        match self {
            Self::Csv => convert_csv(content),
            Self::Tsv => convert_tsv(content),
            Self::JsonLines => convert_jsonl(content),
        }
    }
}

/// Convert file content based on the file's extension.
///
/// Non-tabular files are returned unchanged. A line that fails to parse
/// becomes [`HydrateError::MalformedInput`] naming `path`.
pub fn convert_by_extension(path: &Path, content: &str) -> Result<String, HydrateError> {
    let Some(format) = TableFormat::from_path(path) else {
        return Ok(content.to_string());
    };

    tracing::trace!("Converting {} as {:?}", path.display(), format);

    format.convert(content).map_err(|e| HydrateError::MalformedInput {
        path: path.to_path_buf(),
        line_number: e.line_number,
        line: e.line,
        reason: e.reason,
    })
}
