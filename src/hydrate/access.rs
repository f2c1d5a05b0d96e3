//! File access seam used by the hydration engine.
//!
//! The engine never touches `std::fs` directly; it asks a [`FileAccess`]
//! provider. [`LocalFileAccess`] is the real filesystem. Tests (or embedders
//! serving documents from elsewhere) can supply their own provider.

use std::io;
use std::path::{Path, PathBuf};

/// Read-only view of a file tree.
pub trait FileAccess {
    /// Whether `path` names an existing entry.
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file. Acquire, read, release; no handle outlives the call.
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Fully resolve `path`: absolute, with `.`, `..` and symlinks resolved.
    ///
    /// Fails when the path does not exist.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

/// [`FileAccess`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileAccess;

impl FileAccess for LocalFileAccess {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        path.canonicalize()
    }
}

impl<T: FileAccess + ?Sized> FileAccess for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read_bytes(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).canonicalize(path)
    }
}
