//! Per-branch resolution state.

use std::path::{Path, PathBuf};

/// State threaded through one top-level hydration.
///
/// A context is never mutated once built. Each embed derives a child with
/// [`descend`](Self::descend), so sibling markers only share the ancestor
/// chain they both inherit and cannot see each other's visits.
///
/// Invariants:
/// - `current_depth` is the number of embeds between the root and here
/// - `visited` holds the canonical paths of every ancestor, in visitation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionContext {
    base_path: PathBuf,
    max_depth: usize,
    current_depth: usize,
    visited: Vec<PathBuf>,
}

impl ResolutionContext {
    /// Context for content that does not come from a file.
    ///
    /// Nothing is marked visited, so the first embed of any file is allowed.
    pub fn new(base_path: impl Into<PathBuf>, max_depth: usize) -> Self {
        Self {
            base_path: base_path.into(),
            max_depth,
            current_depth: 0,
            visited: Vec::new(),
        }
    }

    /// Context for a root document at its canonical path.
    ///
    /// The document seeds its own visited chain, so a document that embeds
    /// itself (directly or transitively) is caught.
    pub fn for_document(canonical_path: impl Into<PathBuf>, max_depth: usize) -> Self {
        let canonical_path = canonical_path.into();
        let base_path = canonical_path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self {
            base_path,
            max_depth,
            current_depth: 0,
            visited: vec![canonical_path],
        }
    }

    /// Directory that relative references resolve against.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Recursion ceiling.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Embeds traversed from the root to reach this context.
    pub fn current_depth(&self) -> usize {
        self.current_depth
    }

    /// Ancestor chain in visitation order.
    pub fn visited(&self) -> &[PathBuf] {
        &self.visited
    }

    /// Whether one more embed would exceed the ceiling.
    pub fn depth_exhausted(&self) -> bool {
        self.current_depth >= self.max_depth
    }

    /// Whether `path` is an ancestor in the current chain.
    pub fn has_visited(&self, path: &Path) -> bool {
        self.visited.iter().any(|p| p == path)
    }

    /// The visited chain followed by `path`, for cycle reports.
    pub fn cycle_chain(&self, path: &Path) -> Vec<PathBuf> {
        let mut chain = self.visited.clone();
        chain.push(path.to_path_buf());
        chain
    }

    /// Derive the context for the content of `embedded`.
    ///
    /// One level deeper, based at the embedded file's directory, with the file
    /// appended to the chain. `self` is left untouched.
    pub fn descend(&self, embedded: &Path) -> Self {
        Self {
            base_path: embedded.parent().map(Path::to_path_buf).unwrap_or_default(),
            max_depth: self.max_depth,
            current_depth: self.current_depth + 1,
            visited: self.cycle_chain(embedded),
        }
    }
}
