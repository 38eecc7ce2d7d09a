//! Core plumbing for the iconset modernizer.
//!
//! This crate holds the pieces that do not know about icon themes:
//!
//! - **File**: path-carrying errors, type queries that can avoid following
//!   symlinks, rename and symlink helpers, INI descriptor parsing
//! - **Logging**: `tracing` targets and span names shared by the workspace

pub mod file;
pub mod logging;

pub use file::{FileError, FileErrorKind, FileResult};
