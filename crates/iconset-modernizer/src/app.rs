//! One complete migration run.

use std::path::PathBuf;

use iconset_modernizer_core::file;
use iconset_modernizer_core::logging::targets;

use crate::config::MigrationConfig;
use crate::icon_theme::{BUILTIN_MAPPINGS, ThemeDescriptor, classify};
use crate::migration::{MigrationEngine, MigrationLog, ProgressSink};
use crate::{Error, Result};

/// What a completed run did.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Theme name from the descriptor
    pub theme_name: String,
    /// Parent themes from the descriptor
    pub inherits: Vec<String>,
    /// Where the log was written
    pub log_path: PathBuf,
    /// Records and counts
    pub log: MigrationLog,
}

/// Migrate the theme described by `config`.
///
/// Fails with [`Error::NotAThemeDirectory`] before touching anything if the
/// descriptor is missing. Otherwise the descriptor is read, its directories
/// are classified against the built-in mapping table, the engine runs, and
/// the log is written once at the end.
pub fn run(config: &MigrationConfig, progress: &mut dyn ProgressSink) -> Result<RunReport> {
    let config = config
        .clone()
        .theme_root(file::absolute_path(&config.theme_root)?);
    let descriptor_path = config.descriptor_path();
    if !file::is_file(&descriptor_path) {
        return Err(Error::not_a_theme(descriptor_path));
    }

    let descriptor = ThemeDescriptor::load(&descriptor_path)?;
    tracing::info!(
        target: targets::DESCRIPTOR,
        theme = %descriptor.name,
        directories = descriptor.directories.len(),
        "loaded theme descriptor"
    );

    let groups = classify(&descriptor.directories, &BUILTIN_MAPPINGS);
    let engine = MigrationEngine::new(&config.theme_root, &BUILTIN_MAPPINGS)?
        .with_extensions(config.extensions.iter().cloned());
    let log = engine.run(&groups, progress)?;

    let log_path = config.log_path();
    log.write_to(&log_path)?;

    Ok(RunReport {
        theme_name: descriptor.name,
        inherits: descriptor.inherits,
        log_path,
        log,
    })
}
