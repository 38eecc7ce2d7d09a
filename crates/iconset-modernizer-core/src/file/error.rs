//! Error types for file operations.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for file operations.
#[derive(Debug)]
pub struct FileError {
    /// The kind of error that occurred.
    kind: FileErrorKind,
    /// The operation that failed ("rename", "symlink", ...), if known.
    operation: Option<&'static str>,
    /// The path involved in the error, if any.
    path: Option<PathBuf>,
    /// The underlying source error, if any.
    source: Option<io::Error>,
}

/// The kind of file error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    /// File or directory not found.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// File already exists.
    AlreadyExists,
    /// Invalid path or filename.
    InvalidPath,
    /// The path is a directory, not a file.
    IsDirectory,
    /// A path component is not a directory.
    NotDirectory,
    /// Rename or link across filesystems.
    CrossesDevices,
    /// Read-only filesystem.
    ReadOnly,
    /// No space left on device.
    NoSpace,
    /// Invalid data or encoding.
    InvalidData,
    /// An unknown or unclassified error occurred.
    Other,
}

impl FileErrorKind {
    fn classify(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => FileErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => FileErrorKind::PermissionDenied,
            io::ErrorKind::AlreadyExists => FileErrorKind::AlreadyExists,
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidFilename => {
                FileErrorKind::InvalidPath
            }
            io::ErrorKind::IsADirectory => FileErrorKind::IsDirectory,
            io::ErrorKind::NotADirectory => FileErrorKind::NotDirectory,
            io::ErrorKind::CrossesDevices => FileErrorKind::CrossesDevices,
            io::ErrorKind::ReadOnlyFilesystem => FileErrorKind::ReadOnly,
            io::ErrorKind::StorageFull => FileErrorKind::NoSpace,
            io::ErrorKind::InvalidData => FileErrorKind::InvalidData,
            _ => FileErrorKind::Other,
        }
    }
}

impl FileError {
    fn new(kind: FileErrorKind, path: Option<PathBuf>, source: Option<io::Error>) -> Self {
        Self {
            kind,
            operation: None,
            path,
            source,
        }
    }

    /// Creates a file error from an I/O error and path.
    pub fn from_io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: FileErrorKind::classify(err.kind()),
            operation: None,
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Creates an "invalid data" error for a file whose content could not be parsed.
    pub fn invalid_data(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(
            FileErrorKind::InvalidData,
            path,
            Some(io::Error::new(io::ErrorKind::InvalidData, message.into())),
        )
    }

    /// Tags the error with the operation that produced it.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> FileErrorKind {
        self.kind
    }

    /// Returns the failed operation, if recorded.
    pub fn operation(&self) -> Option<&'static str> {
        self.operation
    }

    /// Returns the path involved in the error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    /// Returns true if this error indicates the file was not found.
    pub fn is_not_found(&self) -> bool {
        self.kind == FileErrorKind::NotFound
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(op) = self.operation {
            write!(f, "{} failed: ", op)?;
        }
        match &self.path {
            Some(path) => write!(f, "{}: {}", self.kind, path.display())?,
            None => write!(f, "{}", self.kind)?,
        }
        if self.kind == FileErrorKind::InvalidData {
            if let Some(source) = &self.source {
                write!(f, " ({})", source)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for FileErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileErrorKind::NotFound => write!(f, "file not found"),
            FileErrorKind::PermissionDenied => write!(f, "permission denied"),
            FileErrorKind::AlreadyExists => write!(f, "file already exists"),
            FileErrorKind::InvalidPath => write!(f, "invalid path"),
            FileErrorKind::IsDirectory => write!(f, "is a directory"),
            FileErrorKind::NotDirectory => write!(f, "not a directory"),
            FileErrorKind::CrossesDevices => write!(f, "cross-device link"),
            FileErrorKind::ReadOnly => write!(f, "read-only filesystem"),
            FileErrorKind::NoSpace => write!(f, "no space left on device"),
            FileErrorKind::InvalidData => write!(f, "invalid data"),
            FileErrorKind::Other => write!(f, "file error"),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<io::Error> for FileError {
    fn from(err: io::Error) -> Self {
        Self {
            kind: FileErrorKind::classify(err.kind()),
            operation: None,
            path: None,
            source: Some(err),
        }
    }
}

/// A specialized Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;
