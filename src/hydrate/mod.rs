//! Recursive `{{path}}` embedding.
//!
//! A document may contain embed markers of the form `{{relative/or/absolute/path}}`.
//! Hydration replaces each marker with the content of the file it names, after
//! converting tabular files (see [`crate::convert`]) and hydrating that content
//! in turn. Relative references resolve against the directory of the file that
//! contains the marker.
//!
//! # Resolution Order
//!
//! For every marker, left to right:
//!
//! 1. Join the trimmed reference onto the current base directory and canonicalize it
//! 2. Fail with [`MaxDepthExceeded`](crate::core::HydrateError::MaxDepthExceeded) if
//!    the current depth has reached the ceiling
//! 3. Fail with [`MissingFile`](crate::core::HydrateError::MissingFile) if nothing exists there
//! 4. Fail with [`CircularReference`](crate::core::HydrateError::CircularReference) if the
//!    path is already on the current chain
//! 5. Read the file; a read failure (a directory, say) is also `MissingFile`
//! 6. Fail with [`BinaryFile`](crate::core::HydrateError::BinaryFile) on a NUL byte in the
//!    first 8 KiB or invalid UTF-8
//! 7. Convert by extension and hydrate the result one level deeper
//!
//! Cycle detection is per chain, not global: the same file may be embedded any
//! number of times from different branches.
//!
//! # Depth Defaults
//!
//! [`hydrate_content`] allows ten levels of embedding. The CLI defaults to five
//! (see [`crate::constants`]); [`hydrate_file`] takes the ceiling explicitly.

mod access;
mod context;
mod engine;
mod scanner;

pub use access::{FileAccess, LocalFileAccess};
pub use context::ResolutionContext;
pub use engine::{Hydrator, is_binary};
pub use scanner::{EMBED_PATTERN, EmbedMarker, scan_markers};

use crate::core::HydrateError;
use std::path::Path;

/// Hydrate `content` whose relative references resolve against `base_path`.
///
/// Uses the default ceiling of ten levels.
///
/// # Examples
///
/// ```rust
/// use hydrate_cli::hydrate::hydrate_content;
/// use std::path::Path;
///
/// let text = hydrate_content("no markers here", Path::new(".")).unwrap();
/// assert_eq!(text, "no markers here");
/// ```
pub fn hydrate_content(content: &str, base_path: &Path) -> Result<String, HydrateError> {
    Hydrator::new().hydrate_content(content, base_path)
}

/// Read and hydrate the document at `path` with the given ceiling.
pub fn hydrate_file(path: &Path, max_depth: usize) -> Result<String, HydrateError> {
    Hydrator::new().with_max_depth(max_depth).hydrate_file(path)
}
