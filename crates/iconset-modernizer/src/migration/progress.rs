//! Console progress reporting.
//!
//! Progress output is informational only; write failures are ignored.

use std::io::{self, Write};

use super::candidate::Decision;

/// Column at which per-extension markers start.
const MARKER_COLUMN: usize = 60;

/// Receives per-icon progress from the engine.
///
/// For each (directory, legacy name) the engine calls `begin_icon`, then
/// `candidate` once per extension, then `end_icon`.
pub trait ProgressSink {
    /// A new legacy icon in `directory` is about to be evaluated.
    fn begin_icon(&mut self, directory: &str, legacy: &str);

    /// One extension of the current icon was decided.
    fn candidate(&mut self, extension: &str, decision: Decision);

    /// All extensions of the current icon were decided.
    fn end_icon(&mut self);
}

/// Discards all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn begin_icon(&mut self, _directory: &str, _legacy: &str) {}

    fn candidate(&mut self, _extension: &str, _decision: Decision) {}

    fn end_icon(&mut self) {}
}

/// Writes one line per icon: `[dir] name`, padded, then a marker per extension.
///
/// ```text
/// [48x48/actions] previous                                    png  ---  ----
/// [48x48/actions] next                                        EEE  @@@  ----
/// ```
#[derive(Debug)]
pub struct ConsoleProgress<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleProgress<io::Stdout> {
    /// Report to standard output.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleProgress<W> {
    /// Report to an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressSink for ConsoleProgress<W> {
    fn begin_icon(&mut self, directory: &str, legacy: &str) {
        let label = format!("[{}] {}", directory, legacy);
        let _ = write!(self.out, "{:<width$}", label, width = MARKER_COLUMN);
    }

    fn candidate(&mut self, extension: &str, decision: Decision) {
        let _ = write!(self.out, "{}  ", decision.marker(extension));
    }

    fn end_icon(&mut self) {
        let _ = writeln!(self.out);
        let _ = self.out.flush();
    }
}
