//! File type queries.
//!
//! The migration engine needs to tell a regular file from a symbolic link
//! without following it. `is_file` and `is_dir` follow links;
//! `file_type_no_follow` does not.

use std::fs;
use std::path::Path;

/// Represents the type of a file system entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// A symbolic link.
    Symlink,
    /// An unknown or special file type.
    Other,
}

impl From<fs::FileType> for FileType {
    fn from(ft: fs::FileType) -> Self {
        // Symlink first: only reachable through symlink_metadata.
        if ft.is_symlink() {
            FileType::Symlink
        } else if ft.is_file() {
            FileType::File
        } else if ft.is_dir() {
            FileType::Directory
        } else {
            FileType::Other
        }
    }
}

/// Returns the type of the entry at `path` without following a final symlink.
///
/// Returns `None` if nothing exists at `path` (a dangling symlink still
/// exists and reports [`FileType::Symlink`]).
pub fn file_type_no_follow(path: impl AsRef<Path>) -> Option<FileType> {
    fs::symlink_metadata(path.as_ref())
        .ok()
        .map(|m| m.file_type().into())
}

/// Returns true if the given path is a regular file, or a symlink resolving to one.
pub fn is_file(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Returns true if the given path is a directory, or a symlink resolving to one.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");
        assert!(!is_file(&path));
        assert!(!is_dir(&path));
        assert_eq!(file_type_no_follow(&path), None);
    }

    #[test]
    fn test_regular_file_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("icon.png");
        fs::write(&file, b"png").unwrap();

        assert!(is_file(&file));
        assert!(!is_dir(&file));
        assert_eq!(file_type_no_follow(&file), Some(FileType::File));
        assert!(is_dir(dir.path()));
        assert_eq!(file_type_no_follow(dir.path()), Some(FileType::Directory));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("previous.png");
        std::os::unix::fs::symlink(dir.path().join("gone.png"), &link).unwrap();

        assert!(!is_file(&link));
        assert!(!is_dir(&link));
        assert_eq!(file_type_no_follow(&link), Some(FileType::Symlink));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_file_follows() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("go-next.png");
        let link = dir.path().join("next.png");
        fs::write(&target, b"png").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(is_file(&link));
        assert_eq!(file_type_no_follow(&link), Some(FileType::Symlink));
    }
}
