//! Icon migration: candidates, decisions, the engine and its log.
//!
//! For every (directory, legacy name, extension) the engine decides one of
//! four outcomes, in priority order:
//!
//! | Outcome              | Action                          | Log line          |
//! |----------------------|---------------------------------|-------------------|
//! | destination exists   | none                            | `E <destination>` |
//! | source is a link     | none                            | `@ <source>`      |
//! | source is a file     | rename, link old name to new    | `R <source> --> <destination>` |
//! | source absent        | none                            | none              |
//!
//! Running the engine twice over the same tree is safe: everything the
//! first run renamed shows up as present or linked on the second.

mod candidate;
mod engine;
mod log;
mod progress;
mod record;

pub use candidate::{ConversionCandidate, Decision};
pub use engine::{DEFAULT_EXTENSIONS, MigrationEngine};
pub use log::{LOG_FILE, MigrationLog, MigrationSummary};
pub use progress::{ConsoleProgress, NullProgress, ProgressSink};
pub use record::{LogRecord, RecordKind};
