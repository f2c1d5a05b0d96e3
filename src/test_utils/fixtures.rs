//! Temporary document trees for hydration tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway directory of documents, removed on drop.
///
/// The root is canonicalized up front so paths handed back by [`write`](Self::write)
/// compare equal to the canonical paths reported in hydration errors.
pub struct DocTree {
    _temp: TempDir,
    root: PathBuf,
}

impl DocTree {
    /// Create an empty tree.
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("Failed to create temp directory")?;
        let root = temp.path().canonicalize().context("Failed to canonicalize temp directory")?;
        Ok(Self {
            _temp: temp,
            root,
        })
    }

    /// Root directory of the tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `relative` inside the tree. Nothing is created.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Write a text file, creating parent directories. Returns its path.
    pub fn write(&self, relative: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        self.write_bytes(relative, content.as_bytes())
    }

    /// Write raw bytes, creating parent directories. Returns its path.
    pub fn write_bytes(&self, relative: impl AsRef<Path>, content: &[u8]) -> Result<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(path)
    }

    /// Read a file in the tree back as text.
    pub fn read(&self, relative: impl AsRef<Path>) -> Result<String> {
        let path = self.path(relative);
        fs::read_to_string(&path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Build a linear chain `level0.md -> level1.md -> ... -> level{n-1}.md`.
    ///
    /// Each level reads `level{i}: {{level{i+1}.md}}` and the last holds `leaf`.
    /// Returns the paths in chain order.
    pub fn chain(&self, levels: usize, leaf: &str) -> Result<Vec<PathBuf>> {
        (0..levels)
            .map(|i| {
                let content = if i + 1 == levels {
                    leaf.to_string()
                } else {
                    format!("level{i}: {{{{level{}.md}}}}", i + 1)
                };
                self.write(format!("level{i}.md"), &content)
            })
            .collect()
    }
}
