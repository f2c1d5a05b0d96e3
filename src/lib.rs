//! hydrate - recursive document embedding
//!
//! Hydrate expands `{{path/to/doc}}` markers in a text document into the
//! content of the referenced files. Embedding is recursive, relative paths
//! resolve against the file that contains the marker, and CSV, TSV and JSONL
//! files are rendered as markdown tables on the way in.
//!
//! # Example
//!
//! Given these files:
//!
//! ```text
//! guide.md         # Guide\n\n{{ parts/intro.md }}\n\n{{ data/results.csv }}
//! parts/intro.md   Welcome.
//! data/results.csv name,score\nada,10
//! ```
//!
//! hydrating `guide.md` produces:
//!
//! ```text
//! # Guide
//!
//! Welcome.
//!
//! | name | score |
//! | --- | --- |
//! | ada | 10 |
//! ```
//!
//! # Modules
//!
//! - [`hydrate`] - marker scanning, resolution context and the recursive engine
//! - [`convert`] - CSV, TSV and JSONL to markdown table conversion
//! - [`core`] - error types and user-facing error formatting
//! - [`cli`] - the `hydrate` command
//! - [`config`] - the optional `~/.hydrate/config.toml`
//! - [`utils`] - path normalization and atomic file writes
//!
//! # Failure Model
//!
//! Hydration is all-or-nothing: the first failing marker aborts the whole
//! call and no partial output is returned. See [`core::HydrateError`] for the
//! failure kinds.

pub mod cli;
pub mod config;
pub mod constants;
pub mod convert;
pub mod core;
pub mod hydrate;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
