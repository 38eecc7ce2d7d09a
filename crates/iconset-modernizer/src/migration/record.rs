//! Migration log records.

use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of a logged outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// The legacy file was renamed and replaced by a link.
    Renamed,
    /// The standardized file already existed.
    DestinationExists,
    /// The legacy path was already a symbolic link.
    SourceIsLink,
}

impl RecordKind {
    /// Single-character tag used in the log file.
    pub fn tag(&self) -> char {
        match self {
            RecordKind::Renamed => 'R',
            RecordKind::DestinationExists => 'E',
            RecordKind::SourceIsLink => '@',
        }
    }
}

/// One line of the migration log.
///
/// Paths are relative to the theme root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogRecord {
    /// `source` was moved to `destination` and replaced by a link to it.
    Renamed {
        source: PathBuf,
        destination: PathBuf,
    },
    /// `destination` already existed; the candidate was left alone.
    DestinationExists { destination: PathBuf },
    /// `source` was already a symbolic link; the candidate was left alone.
    SourceIsLink { source: PathBuf },
}

impl LogRecord {
    /// The record's kind.
    pub fn kind(&self) -> RecordKind {
        match self {
            LogRecord::Renamed { .. } => RecordKind::Renamed,
            LogRecord::DestinationExists { .. } => RecordKind::DestinationExists,
            LogRecord::SourceIsLink { .. } => RecordKind::SourceIsLink,
        }
    }

    /// The legacy path, if the record names one.
    pub fn source(&self) -> Option<&Path> {
        match self {
            LogRecord::Renamed { source, .. } | LogRecord::SourceIsLink { source } => Some(source),
            LogRecord::DestinationExists { .. } => None,
        }
    }

    /// The standardized path, if the record names one.
    pub fn destination(&self) -> Option<&Path> {
        match self {
            LogRecord::Renamed { destination, .. }
            | LogRecord::DestinationExists { destination } => Some(destination),
            LogRecord::SourceIsLink { .. } => None,
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.kind().tag();
        match self {
            LogRecord::Renamed {
                source,
                destination,
            } => write!(
                f,
                "{} {:<50} --> {}",
                tag,
                source.to_string_lossy(),
                destination.to_string_lossy()
            ),
            LogRecord::DestinationExists { destination } => {
                write!(f, "{} {}", tag, destination.to_string_lossy())
            }
            LogRecord::SourceIsLink { source } => write!(f, "{} {}", tag, source.to_string_lossy()),
        }
    }
}
