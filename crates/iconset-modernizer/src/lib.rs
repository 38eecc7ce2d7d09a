//! Icon theme modernization.
//!
//! Renames KDE3-era icons in a freedesktop icon theme to their standardized
//! names and leaves a symbolic link at every old name, so applications using
//! either name keep finding the icon.
//!
//! # Overview
//!
//! - [`icon_theme`]: the theme descriptor, categories, and the built-in
//!   legacy → standardized name table
//! - [`migration`]: the per-icon decision, the engine, and the run log
//! - [`config`]: run configuration
//! - [`app`]: a complete run from theme root to written log
//!
//! # Example
//!
//! ```ignore
//! use iconset_modernizer::app;
//! use iconset_modernizer::config::MigrationConfig;
//! use iconset_modernizer::migration::NullProgress;
//!
//! let config = MigrationConfig::new().theme_root("/usr/share/icons/crystalsvg");
//! let report = app::run(&config, &mut NullProgress)?;
//! println!("{}", report.log.summary());
//! ```

pub mod app;
pub mod config;
mod error;
pub mod icon_theme;
pub mod migration;

pub use error::{EXIT_FAILURE, EXIT_NOT_A_THEME, Error, Result};
