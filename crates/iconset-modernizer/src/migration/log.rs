//! The migration log: every decision of a run, in order.

use std::fmt;
use std::path::Path;

use iconset_modernizer_core::file::{self, FileResult};
use iconset_modernizer_core::logging::targets;

use super::candidate::Decision;
use super::record::{LogRecord, RecordKind};

/// Default file name of the persisted log, inside the theme root.
pub const LOG_FILE: &str = "conversion.log";

/// Per-outcome counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Legacy files renamed and linked
    pub renamed: usize,
    /// Candidates whose destination already existed
    pub destination_exists: usize,
    /// Candidates whose source was already a link
    pub source_is_link: usize,
    /// Candidates with no legacy file
    pub absent: usize,
}

impl MigrationSummary {
    /// Total number of candidates evaluated.
    pub fn candidates(&self) -> usize {
        self.renamed + self.destination_exists + self.source_is_link + self.absent
    }

    fn count(&mut self, decision: Decision) {
        match decision {
            Decision::Migrate => self.renamed += 1,
            Decision::DestinationExists => self.destination_exists += 1,
            Decision::SourceIsLink => self.source_is_link += 1,
            Decision::Absent => self.absent += 1,
        }
    }
}

impl fmt::Display for MigrationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} renamed, {} already present, {} already linked, {} absent",
            self.renamed, self.destination_exists, self.source_is_link, self.absent
        )
    }
}

/// Ordered, append-only record of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationLog {
    records: Vec<LogRecord>,
    summary: MigrationSummary,
}

impl MigrationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one evaluated candidate, appending its record if it has one.
    pub fn push(&mut self, decision: Decision, record: Option<LogRecord>) {
        self.summary.count(decision);
        if let Some(record) = record {
            self.records.push(record);
        }
    }

    /// Records in the order they were produced.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Records of one kind.
    pub fn records_of(&self, kind: RecordKind) -> impl Iterator<Item = &LogRecord> {
        self.records.iter().filter(move |r| r.kind() == kind)
    }

    /// Per-outcome counts.
    pub fn summary(&self) -> MigrationSummary {
        self.summary
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the log, one newline-terminated record per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&record.to_string());
            out.push('\n');
        }
        out
    }

    /// Write the rendered log to `path`, replacing any previous file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> FileResult<()> {
        let path = path.as_ref();
        file::write_text(path, self.render())?;
        tracing::debug!(
            target: targets::LOG,
            path = %path.display(),
            records = self.records.len(),
            "wrote migration log"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MigrationLog {
        let mut log = MigrationLog::new();
        log.push(
            Decision::Migrate,
            Some(LogRecord::Renamed {
                source: "16x16/actions/next.png".into(),
                destination: "16x16/actions/go-next.png".into(),
            }),
        );
        log.push(Decision::Absent, None);
        log.push(
            Decision::DestinationExists,
            Some(LogRecord::DestinationExists {
                destination: "16x16/actions/go-up.png".into(),
            }),
        );
        log.push(
            Decision::SourceIsLink,
            Some(LogRecord::SourceIsLink {
                source: "16x16/actions/down.png".into(),
            }),
        );
        log
    }

    #[test]
    fn test_summary_counts_absent_without_records() {
        let log = sample();
        let summary = log.summary();
        assert_eq!(summary.renamed, 1);
        assert_eq!(summary.absent, 1);
        assert_eq!(summary.candidates(), 4);
        assert_eq!(log.records().len(), 3);
        assert_eq!(
            summary.to_string(),
            "1 renamed, 1 already present, 1 already linked, 1 absent"
        );
    }

    #[test]
    fn test_render_order() {
        let rendered = sample().render();
        let tags: Vec<_> = rendered.lines().map(|l| &l[..1]).collect();
        assert_eq!(tags, vec!["R", "E", "@"]);
        assert!(rendered.ends_with("@ 16x16/actions/down.png\n"));
    }

    #[test]
    fn test_records_of() {
        let log = sample();
        assert_eq!(log.records_of(RecordKind::Renamed).count(), 1);
        assert_eq!(log.records_of(RecordKind::SourceIsLink).count(), 1);
    }

    #[test]
    fn test_empty_log_renders_empty() {
        let log = MigrationLog::new();
        assert!(log.is_empty());
        assert_eq!(log.render(), "");
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);
        std::fs::write(&path, "stale content from an earlier run\n").unwrap();

        sample().write_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, sample().render());
        assert!(!written.contains("stale"));
    }
}
