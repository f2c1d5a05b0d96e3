//! Path normalization helpers.

use std::path::{Component, Path, PathBuf};

/// Normalizes a path by resolving `.` and `..` components lexically.
///
/// Does not touch the filesystem, so symlinks are left alone. Used when a
/// path cannot be canonicalized because it does not exist.
///
/// # Examples
///
/// ```rust,no_run
/// use hydrate_cli::utils::fs::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// let path = Path::new("/foo/./bar/../baz");
/// assert_eq!(normalize_path(path), PathBuf::from("/foo/baz"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Makes `path` absolute against the current directory, then normalizes it.
///
/// Falls back to the lexically normalized input when the current directory
/// cannot be determined.
#[must_use]
pub fn absolute_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize_path(&absolute)
}
