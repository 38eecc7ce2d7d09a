//! The icon migration engine.

use std::path::{Path, PathBuf};

use iconset_modernizer_core::file;
use iconset_modernizer_core::logging::{span_names, targets};

use super::candidate::{ConversionCandidate, Decision};
use super::log::MigrationLog;
use super::progress::ProgressSink;
use super::record::LogRecord;
use crate::Result;
use crate::icon_theme::{CategoryGroups, CategoryMapping, ThemeDirectory};

/// Extensions tried for every legacy name, in order.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["png", "svg", "svgz"];

/// Renames legacy icons under a theme root and leaves links at the old names.
///
/// Candidates are enumerated by category in group order, then directory in
/// descriptor order, then legacy name in table order, then extension in
/// configured order. Each candidate is decided by
/// [`ConversionCandidate::evaluate`] and acted on immediately.
///
/// A filesystem failure aborts the run. Work already done stays in place;
/// a later run classifies it as present or linked and moves on.
#[derive(Debug, Clone)]
pub struct MigrationEngine<'a> {
    root: PathBuf,
    mappings: &'a [CategoryMapping],
    extensions: Vec<String>,
}

impl<'a> MigrationEngine<'a> {
    /// Create an engine for the theme at `root`.
    ///
    /// `root` is made absolute so that links point at absolute destinations.
    pub fn new(root: impl AsRef<Path>, mappings: &'a [CategoryMapping]) -> Result<Self> {
        Ok(Self {
            root: file::absolute_path(root)?,
            mappings,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        })
    }

    /// Replace the extension list.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// The extensions tried per legacy name.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Migrate every candidate reachable from `groups`.
    pub fn run(
        &self,
        groups: &CategoryGroups,
        progress: &mut dyn ProgressSink,
    ) -> Result<MigrationLog> {
        let span = tracing::info_span!(
            target: targets::ENGINE,
            span_names::RUN,
            root = %self.root.display()
        );
        let _enter = span.enter();

        let mut log = MigrationLog::new();

        for (category, directories) in groups.iter() {
            let Some(mapping) = self.mappings.iter().find(|m| m.category() == category) else {
                continue;
            };
            for directory in directories {
                self.migrate_directory(directory, mapping, progress, &mut log)?;
            }
        }

        let summary = log.summary();
        tracing::info!(
            target: targets::ENGINE,
            renamed = summary.renamed,
            destination_exists = summary.destination_exists,
            source_is_link = summary.source_is_link,
            absent = summary.absent,
            "migration finished"
        );
        Ok(log)
    }

    fn migrate_directory(
        &self,
        directory: &ThemeDirectory,
        mapping: &CategoryMapping,
        progress: &mut dyn ProgressSink,
        log: &mut MigrationLog,
    ) -> Result<()> {
        if !file::is_dir(self.root.join(&directory.path)) {
            tracing::debug!(
                target: targets::ENGINE,
                directory = %directory.path,
                "declared directory not on disk, skipping"
            );
            return Ok(());
        }

        let span = tracing::debug_span!(
            target: targets::ENGINE,
            span_names::DIRECTORY,
            directory = %directory.path,
            category = %mapping.category()
        );
        let _enter = span.enter();

        for (legacy, standardized) in mapping.iter() {
            progress.begin_icon(&directory.path, legacy);
            for extension in &self.extensions {
                let candidate =
                    ConversionCandidate::new(&directory.path, legacy, standardized, extension);
                let decision = candidate.evaluate(&self.root);
                tracing::debug!(
                    target: targets::ENGINE,
                    source = %candidate.source().display(),
                    ?decision,
                    "candidate decided"
                );
                let record = self.apply(&candidate, decision)?;
                progress.candidate(extension, decision);
                log.push(decision, record);
            }
            progress.end_icon();
        }
        Ok(())
    }

    fn apply(
        &self,
        candidate: &ConversionCandidate<'_>,
        decision: Decision,
    ) -> Result<Option<LogRecord>> {
        let record = match decision {
            Decision::DestinationExists => Some(LogRecord::DestinationExists {
                destination: candidate.destination(),
            }),
            Decision::SourceIsLink => Some(LogRecord::SourceIsLink {
                source: candidate.source(),
            }),
            Decision::Migrate => {
                let source = self.root.join(candidate.source());
                let destination = file::normalize_path(self.root.join(candidate.destination()));
                file::rename_file(&source, &destination)?;
                file::symlink_file(&destination, &source)?;
                tracing::info!(
                    target: targets::ENGINE,
                    source = %candidate.source().display(),
                    destination = %candidate.destination().display(),
                    "renamed"
                );
                Some(LogRecord::Renamed {
                    source: candidate.source(),
                    destination: candidate.destination(),
                })
            }
            Decision::Absent => None,
        };
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::icon_theme::{BUILTIN_MAPPINGS, IconCategory, builtin_mapping, classify};
    use crate::migration::progress::{ConsoleProgress, NullProgress};
    use crate::migration::record::RecordKind;

    fn groups(dirs: &[(&str, &str)]) -> CategoryGroups {
        let dirs: Vec<_> = dirs.iter().map(|(p, c)| ThemeDirectory::new(*p, *c)).collect();
        classify(&dirs, &BUILTIN_MAPPINGS)
    }

    fn touch(root: &Path, rel: &str, contents: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_migrates_and_links() {
        let root = tempfile::tempdir().unwrap();
        touch(root.path(), "48x48/actions/previous.png", b"icon");

        let engine = MigrationEngine::new(root.path(), &BUILTIN_MAPPINGS).unwrap();
        let log = engine
            .run(&groups(&[("48x48/actions", "Actions")]), &mut NullProgress)
            .unwrap();

        assert_eq!(log.records().len(), 1);
        assert_eq!(log.records()[0].kind(), RecordKind::Renamed);

        let dest = root.path().join("48x48/actions/go-previous.png");
        let src = root.path().join("48x48/actions/previous.png");
        assert_eq!(fs::read(&dest).unwrap(), b"icon");
        let target = fs::read_link(&src).unwrap();
        assert!(target.is_absolute());
        assert_eq!(fs::canonicalize(target).unwrap(), fs::canonicalize(&dest).unwrap());
    }

    #[test]
    fn test_destination_is_not_overwritten() {
        let root = tempfile::tempdir().unwrap();
        touch(root.path(), "16x16/devices/printer1.png", b"old");
        touch(root.path(), "16x16/devices/printer.png", b"new");

        let engine = MigrationEngine::new(root.path(), &BUILTIN_MAPPINGS).unwrap();
        let log = engine
            .run(&groups(&[("16x16/devices", "Devices")]), &mut NullProgress)
            .unwrap();

        assert_eq!(log.summary().renamed, 0);
        assert_eq!(log.summary().destination_exists, 1);
        assert_eq!(fs::read(root.path().join("16x16/devices/printer.png")).unwrap(), b"new");
        assert_eq!(fs::read(root.path().join("16x16/devices/printer1.png")).unwrap(), b"old");
    }

    #[test]
    fn test_missing_directory_is_skipped() {
        let root = tempfile::tempdir().unwrap();
        let mut out = ConsoleProgress::new(Vec::new());

        let engine = MigrationEngine::new(root.path(), &BUILTIN_MAPPINGS).unwrap();
        let log = engine
            .run(&groups(&[("22x22/actions", "Actions")]), &mut out)
            .unwrap();

        assert!(log.is_empty());
        assert_eq!(log.summary().candidates(), 0);
        assert!(out.into_inner().is_empty());
    }

    #[test]
    fn test_extension_order_and_counts() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("scalable/actions")).unwrap();

        let engine = MigrationEngine::new(root.path(), &BUILTIN_MAPPINGS)
            .unwrap()
            .with_extensions(["svg"]);
        assert_eq!(engine.extensions(), ["svg".to_string()]);

        let log = engine
            .run(&groups(&[("scalable/actions", "Actions")]), &mut NullProgress)
            .unwrap();
        assert_eq!(log.summary().absent, builtin_mapping(IconCategory::Actions).len());
    }

    #[test]
    fn test_only_mapped_categories_run() {
        let root = tempfile::tempdir().unwrap();
        touch(root.path(), "48x48/actions/previous.png", b"icon");

        let devices_only: Vec<_> = BUILTIN_MAPPINGS
            .iter()
            .filter(|m| m.category() == IconCategory::Devices)
            .copied()
            .collect();
        let engine = MigrationEngine::new(root.path(), &devices_only).unwrap();
        let log = engine
            .run(&groups(&[("48x48/actions", "Actions")]), &mut NullProgress)
            .unwrap();

        assert_eq!(log.summary().candidates(), 0);
        assert!(root.path().join("48x48/actions/previous.png").is_file());
    }
}
