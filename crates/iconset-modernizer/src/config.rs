//! Run configuration.

use std::path::{Path, PathBuf};

use crate::icon_theme::DESCRIPTOR_FILE;
use crate::migration::{DEFAULT_EXTENSIONS, LOG_FILE};

/// Configuration for one migration run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigrationConfig {
    /// The theme root directory.
    pub theme_root: PathBuf,
    /// Descriptor file name inside the theme root.
    pub descriptor_name: String,
    /// Log file. Relative paths are resolved against the theme root.
    pub log_file: PathBuf,
    /// Extensions tried per legacy name, in order.
    pub extensions: Vec<String>,
    /// Report per-icon progress on the console.
    pub show_progress: bool,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            theme_root: PathBuf::from("."),
            descriptor_name: DESCRIPTOR_FILE.to_string(),
            log_file: PathBuf::from(LOG_FILE),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            show_progress: true,
        }
    }
}

impl MigrationConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme root.
    pub fn theme_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.theme_root = root.into();
        self
    }

    /// Set the log file path.
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Set the extensions. An empty list keeps the current one.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extensions: Vec<String> = extensions.into_iter().map(Into::into).collect();
        if !extensions.is_empty() {
            self.extensions = extensions;
        }
        self
    }

    /// Enable or disable console progress.
    pub fn show_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// Full path of the descriptor file.
    pub fn descriptor_path(&self) -> PathBuf {
        self.theme_root.join(&self.descriptor_name)
    }

    /// Full path of the log file.
    pub fn log_path(&self) -> PathBuf {
        resolve(&self.theme_root, &self.log_file)
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
