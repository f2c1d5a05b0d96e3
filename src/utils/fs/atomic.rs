//! Atomic file write operations using temp-and-rename strategy.
//!
//! Output files either hold the previous content or the complete new content,
//! never a partial write. This matters most for in-place updates, where the
//! output path is also the input document.

use crate::core::file_error::{FileOperation, FileOperationError, FileResultExt};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Safely writes a string to a file using atomic operations.
///
/// Convenience wrapper around [`atomic_write`].
///
/// # Examples
///
/// ```rust,no_run
/// use hydrate_cli::utils::fs::safe_write;
/// use std::path::Path;
///
/// # fn example() -> Result<(), hydrate_cli::core::FileOperationError> {
/// safe_write(Path::new("README.md"), "# Title\n")?;
/// # Ok(())
/// # }
/// ```
pub fn safe_write(path: &Path, content: &str) -> Result<(), FileOperationError> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Write content to a sibling temporary file
/// 2. Sync the temporary file to disk
/// 3. Rename it over the target path
///
/// Parent directories are created when missing.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<(), FileOperationError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_file_context(
            FileOperation::CreateDir,
            parent,
            "creating output directory",
        )?;
    }

    let temp_path = temp_path_for(path);

    {
        let mut file = fs::File::create(&temp_path).with_file_context(
            FileOperation::Write,
            &temp_path,
            "creating temporary output file",
        )?;

        file.write_all(content).with_file_context(
            FileOperation::Write,
            &temp_path,
            "writing temporary output file",
        )?;

        file.sync_all().with_file_context(
            FileOperation::Write,
            &temp_path,
            "syncing temporary output file",
        )?;
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(FileOperationError::new(
            FileOperation::Rename,
            path,
            "moving output into place",
            e,
        ));
    }

    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_else(|| OsString::from("output"));
    name.push(".hydrate.tmp");
    path.with_file_name(name)
}
