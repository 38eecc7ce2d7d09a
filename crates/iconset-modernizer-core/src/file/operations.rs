//! Convenience functions for common file operations.
//!
//! Every function attaches the offending path (and for mutations, the
//! operation name) to the returned [`FileError`].

use std::fs;
use std::path::Path;

use super::error::{FileError, FileResult};

// ============================================================================
// Reading Functions
// ============================================================================

/// Reads the entire contents of a file as a string.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The file is not valid UTF-8
pub fn read_text(path: impl AsRef<Path>) -> FileResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| FileError::from_io(e, path))
}

// ============================================================================
// Writing Functions
// ============================================================================

/// Writes a string to a file, creating it if it doesn't exist.
///
/// If the file already exists, its contents are replaced.
pub fn write_text(path: impl AsRef<Path>, contents: impl AsRef<str>) -> FileResult<()> {
    let path = path.as_ref();
    fs::write(path, contents.as_ref())
        .map_err(|e| FileError::from_io(e, path).with_operation("write"))
}

// ============================================================================
// File Operations
// ============================================================================

/// Renames or moves a file.
///
/// This works across directories on the same filesystem only; a
/// cross-filesystem move surfaces as [`FileErrorKind::CrossesDevices`].
///
/// [`FileErrorKind::CrossesDevices`]: super::FileErrorKind::CrossesDevices
///
/// # Errors
///
/// Returns an error if:
/// - The source file does not exist
/// - The rename operation fails (e.g., cross-filesystem move)
pub fn rename_file(from: impl AsRef<Path>, to: impl AsRef<Path>) -> FileResult<()> {
    let from = from.as_ref();
    let to = to.as_ref();
    fs::rename(from, to).map_err(|e| {
        let path = if from.exists() { to } else { from };
        FileError::from_io(e, path).with_operation("rename")
    })
}

/// Creates a symbolic link at `link` pointing to the file `target`.
///
/// `target` is stored as given; pass an absolute path for a link that
/// survives being moved.
///
/// # Errors
///
/// Returns an error if something already exists at `link` or the platform
/// refuses to create the link.
pub fn symlink_file(target: impl AsRef<Path>, link: impl AsRef<Path>) -> FileResult<()> {
    let target = target.as_ref();
    let link = link.as_ref();

    #[cfg(unix)]
    let result = std::os::unix::fs::symlink(target, link);
    #[cfg(windows)]
    let result = std::os::windows::fs::symlink_file(target, link);
    #[cfg(not(any(unix, windows)))]
    let result: std::io::Result<()> = {
        let _ = target;
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "symbolic links are not supported on this platform",
        ))
    };

    result.map_err(|e| FileError::from_io(e, link).with_operation("symlink"))
}
