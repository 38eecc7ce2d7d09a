//! Path manipulation helpers.

use std::path::{Component, Path, PathBuf};

use super::error::{FileError, FileResult};

/// Normalizes a path by removing `.` and `..` components where possible.
///
/// This does not access the filesystem and does not resolve symlinks.
///
/// ```ignore
/// assert_eq!(normalize_path("./48x48/../48x48/actions").to_string_lossy(), "48x48/actions");
/// ```
pub fn normalize_path(path: impl AsRef<Path>) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::Prefix(p) => result.push(p.as_os_str()),
            Component::RootDir => result.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    result.push("..");
                }
            }
            Component::Normal(c) => result.push(c),
        }
    }
    if result.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        result
    }
}

/// Returns the absolute, lexically normalized form of `path`.
///
/// Relative paths are resolved against the current working directory.
/// Symlinks are not resolved, so a theme reached through a linked directory
/// keeps its linked location.
pub fn absolute_path(path: impl AsRef<Path>) -> FileResult<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        Ok(normalize_path(path))
    } else {
        let cwd = std::env::current_dir().map_err(|e| FileError::from_io(e, path))?;
        Ok(normalize_path(cwd.join(path)))
    }
}
