//! The recursive substitution engine.

use super::access::{FileAccess, LocalFileAccess};
use super::context::ResolutionContext;
use super::scanner::{EmbedMarker, scan_markers};
use crate::constants::{BINARY_SNIFF_LEN, DEFAULT_CONTENT_MAX_DEPTH};
use crate::convert::convert_by_extension;
use crate::core::HydrateError;
use crate::core::file_error::{FileOperation, FileResultExt};
use crate::utils::fs::absolute_path;
use std::path::{Path, PathBuf};

/// Whether the leading bytes of `content` contain a NUL byte.
pub fn is_binary(content: &[u8]) -> bool {
    content.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0)
}

/// Decode file bytes as text, rejecting anything that looks binary.
fn decode_text(path: &Path, bytes: Vec<u8>) -> Result<String, HydrateError> {
    if is_binary(&bytes) {
        return Err(HydrateError::BinaryFile {
            path: path.to_path_buf(),
        });
    }

    String::from_utf8(bytes).map_err(|_| HydrateError::BinaryFile {
        path: path.to_path_buf(),
    })
}

/// Replaces embed markers with the (recursively hydrated) content they reference.
///
/// A `Hydrator` holds no per-call state, so one instance can serve any number
/// of independent documents, concurrently if its [`FileAccess`] allows.
///
/// # Examples
///
/// ```rust,no_run
/// use hydrate_cli::hydrate::Hydrator;
/// use std::path::Path;
///
/// # fn example() -> Result<(), hydrate_cli::core::HydrateError> {
/// let hydrator = Hydrator::new().with_max_depth(3);
/// let text = hydrator.hydrate_file(Path::new("docs/index.md"))?;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Hydrator<A = LocalFileAccess> {
    access: A,
    max_depth: usize,
}

impl Hydrator<LocalFileAccess> {
    /// Hydrator over the local filesystem with the content-level depth default.
    pub fn new() -> Self {
        Self::with_access(LocalFileAccess)
    }
}

impl Default for Hydrator<LocalFileAccess> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: FileAccess> Hydrator<A> {
    /// Hydrator over a custom file provider.
    pub fn with_access(access: A) -> Self {
        Self {
            access,
            max_depth: DEFAULT_CONTENT_MAX_DEPTH,
        }
    }

    /// Set the recursion ceiling used by [`hydrate_content`](Self::hydrate_content)
    /// and [`hydrate_file`](Self::hydrate_file).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Hydrate content that did not come from a file.
    ///
    /// Relative references resolve against `base_path`. Nothing is marked
    /// visited up front, so the content may embed any file once per chain.
    pub fn hydrate_content(&self, content: &str, base_path: &Path) -> Result<String, HydrateError> {
        let ctx = ResolutionContext::new(absolute_path(base_path), self.max_depth);
        self.hydrate(content, &ctx)
    }

    /// Hydrate a document from disk.
    ///
    /// The document is canonicalized and seeds its own visited chain. A binary
    /// root fails before any marker is scanned.
    pub fn hydrate_file(&self, path: &Path) -> Result<String, HydrateError> {
        let canonical = self
            .access
            .canonicalize(path)
            .with_file_context(FileOperation::Canonicalize, path, "resolving input document")
            .map_err(|e| {
                if e.is_not_found() {
                    HydrateError::InputNotFound {
                        path: path.to_path_buf(),
                    }
                } else {
                    e.into()
                }
            })?;

        let bytes = self.access.read_bytes(&canonical).with_file_context(
            FileOperation::Read,
            &canonical,
            "reading input document",
        )?;
        let content = decode_text(&canonical, bytes)?;

        tracing::debug!(
            "Hydrating {} (max depth {})",
            canonical.display(),
            self.max_depth
        );

        let ctx = ResolutionContext::for_document(canonical, self.max_depth);
        self.hydrate(&content, &ctx)
    }

    /// Replace every marker in `content`, resolving under `ctx`.
    ///
    /// `content` is scanned once. Markers that appear in substituted text are
    /// only expanded by the recursive call on the embedded file itself, never
    /// by rescanning the assembled result.
    pub fn hydrate(&self, content: &str, ctx: &ResolutionContext) -> Result<String, HydrateError> {
        let markers = scan_markers(content);
        if markers.is_empty() {
            return Ok(content.to_string());
        }

        tracing::trace!(
            "Found {} embed marker(s) at depth {} in {}",
            markers.len(),
            ctx.current_depth(),
            ctx.base_path().display()
        );

        let mut output = String::with_capacity(content.len());
        let mut cursor = 0;
        for marker in &markers {
            output.push_str(&content[cursor..marker.span.start]);
            output.push_str(&self.resolve_marker(marker, ctx)?);
            cursor = marker.span.end;
        }
        output.push_str(&content[cursor..]);

        Ok(output)
    }

    fn resolve_marker(
        &self,
        marker: &EmbedMarker,
        ctx: &ResolutionContext,
    ) -> Result<String, HydrateError> {
        let target = self.resolve_reference(ctx.base_path(), &marker.reference);

        // Depth first: a too-deep reference fails on depth even if missing or cyclic
        if ctx.depth_exhausted() {
            return Err(HydrateError::MaxDepthExceeded {
                max_depth: ctx.max_depth(),
                path: target,
            });
        }

        let missing = |target: PathBuf| HydrateError::MissingFile {
            absolute_path: target,
            reference: marker.reference.clone(),
            referenced_in: ctx.base_path().to_path_buf(),
        };

        if !self.access.exists(&target) {
            return Err(missing(target));
        }

        if ctx.has_visited(&target) {
            return Err(HydrateError::CircularReference {
                chain: ctx.cycle_chain(&target),
            });
        }

        let bytes = match self.access.read_bytes(&target) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("Failed to read {}: {}", target.display(), e);
                return Err(missing(target));
            }
        };
        let text = decode_text(&target, bytes)?;
        let converted = convert_by_extension(&target, &text)?;

        tracing::debug!(
            "Embedding {} at depth {}",
            target.display(),
            ctx.current_depth() + 1
        );

        self.hydrate(&converted, &ctx.descend(&target))
    }

    /// Join `reference` onto `base` and canonicalize it.
    ///
    /// Absolute references replace the base. When the target cannot be
    /// canonicalized (usually because it is missing) the lexically normalized
    /// absolute path stands in, so errors still name a sensible location.
    fn resolve_reference(&self, base: &Path, reference: &str) -> PathBuf {
        let joined = base.join(reference);
        self.access.canonicalize(&joined).unwrap_or_else(|_| absolute_path(&joined))
    }
}
