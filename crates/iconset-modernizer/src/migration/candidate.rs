//! Conversion candidates and the per-candidate decision.

use std::path::{Path, PathBuf};

use iconset_modernizer_core::file::{self, FileType};

/// One (directory, legacy name, extension) unit of migration.
///
/// Paths produced here are relative to the theme root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionCandidate<'a> {
    /// Theme directory, relative to the theme root
    pub directory: &'a str,
    /// Legacy icon name (without extension)
    pub legacy: &'a str,
    /// Standardized icon name (without extension)
    pub standardized: &'a str,
    /// File extension (without dot)
    pub extension: &'a str,
}

impl<'a> ConversionCandidate<'a> {
    /// Create a candidate.
    pub fn new(
        directory: &'a str,
        legacy: &'a str,
        standardized: &'a str,
        extension: &'a str,
    ) -> Self {
        Self {
            directory,
            legacy,
            standardized,
            extension,
        }
    }

    /// `directory/legacy.ext`
    pub fn source(&self) -> PathBuf {
        Path::new(self.directory).join(format!("{}.{}", self.legacy, self.extension))
    }

    /// `directory/standardized.ext`
    pub fn destination(&self) -> PathBuf {
        Path::new(self.directory).join(format!("{}.{}", self.standardized, self.extension))
    }

    /// Decide what to do with this candidate under `root`.
    ///
    /// Checks run in a fixed priority order; the first match wins:
    ///
    /// 1. a file (or a link resolving to one) exists at the destination
    /// 2. the source is a symbolic link, dangling or not
    /// 3. the source is a regular file
    /// 4. otherwise the source is absent
    ///
    /// A dangling link at the destination does not count as an existing
    /// destination.
    pub fn evaluate(&self, root: &Path) -> Decision {
        if file::is_file(root.join(self.destination())) {
            return Decision::DestinationExists;
        }
        match file::file_type_no_follow(root.join(self.source())) {
            Some(FileType::Symlink) => Decision::SourceIsLink,
            Some(FileType::File) => Decision::Migrate,
            _ => Decision::Absent,
        }
    }
}

/// Outcome of evaluating a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The standardized icon already exists; nothing is touched.
    DestinationExists,
    /// The legacy path is already a symbolic link; nothing is touched.
    SourceIsLink,
    /// Rename the legacy file and leave a link behind.
    Migrate,
    /// No legacy file; nothing to do and nothing to log.
    Absent,
}

impl Decision {
    /// Fixed-width progress marker for `extension`.
    ///
    /// `E`, `@` and `-` are repeated to the extension's length so columns
    /// line up; a migration shows the extension itself.
    pub fn marker(&self, extension: &str) -> String {
        let fill = |c: char| -> String { std::iter::repeat_n(c, extension.len()).collect() };
        match self {
            Decision::DestinationExists => fill('E'),
            Decision::SourceIsLink => fill('@'),
            Decision::Migrate => extension.to_string(),
            Decision::Absent => fill('-'),
        }
    }
}
