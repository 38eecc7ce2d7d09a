//! Logging conventions for the iconset modernizer.
//!
//! All crates log through the `tracing` facade. Nothing is printed unless the
//! binary (or a test) installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("iconset_modernizer::engine=debug")
//!     .init();
//! ```
//!
//! Progress lines on stdout are not logging; they go through the
//! application's progress sink and are unaffected by these targets.

/// Span names used for tracing.
pub mod span_names {
    /// One full migration run.
    pub const RUN: &str = "iconset_modernizer::run";
    /// Processing of one theme directory.
    pub const DIRECTORY: &str = "iconset_modernizer::directory";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Theme descriptor reading.
    pub const DESCRIPTOR: &str = "iconset_modernizer::descriptor";
    /// Directory classification.
    pub const CLASSIFIER: &str = "iconset_modernizer::classifier";
    /// Per-candidate decisions and filesystem mutation.
    pub const ENGINE: &str = "iconset_modernizer::engine";
    /// Migration log persistence.
    pub const LOG: &str = "iconset_modernizer::log";
}
