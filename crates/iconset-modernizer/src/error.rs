//! Error types for the iconset modernizer.

use std::path::PathBuf;

use iconset_modernizer_core::FileError;

/// Result type alias for migration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit status for a run that failed its "is this a theme?" precondition.
pub const EXIT_NOT_A_THEME: i32 = 2;

/// Exit status for any other failure.
pub const EXIT_FAILURE: i32 = 1;

/// Errors that can abort a migration run.
///
/// Per-icon outcomes (destination present, source already a link, source
/// absent) are never errors; see [`crate::migration::Decision`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The theme root has no descriptor file.
    #[error("This is not an iconset directory (missing '{}')", .path.display())]
    NotAThemeDirectory { path: PathBuf },

    /// The descriptor lacks a section or key the migration depends on.
    #[error("Malformed theme descriptor: missing key '{key}' in section [{section}]")]
    MalformedDescriptor { section: String, key: String },

    /// A file system operation failed.
    #[error(transparent)]
    File(#[from] FileError),
}

impl Error {
    /// Create a "not a theme directory" error for the missing descriptor path.
    pub fn not_a_theme(path: impl Into<PathBuf>) -> Self {
        Self::NotAThemeDirectory { path: path.into() }
    }

    /// Create a malformed-descriptor error.
    pub fn malformed(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            section: section.into(),
            key: key.into(),
        }
    }

    /// Process exit status to report for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotAThemeDirectory { .. } => EXIT_NOT_A_THEME,
            Self::MalformedDescriptor { .. } | Self::File(_) => EXIT_FAILURE,
        }
    }
}
