//! File system plumbing used by the migration.
//!
//! This module wraps the standard library file APIs with path-carrying
//! errors and the handful of queries a rename-and-link migration needs.
//!
//! # Inspecting entries
//!
//! ```ignore
//! use iconset_modernizer_core::file::{file_type_no_follow, is_file, FileType};
//!
//! // Follows symlinks: true for a regular file or a link to one
//! let dest_present = is_file("48x48/actions/go-next.png");
//!
//! // Does not follow: tells a link apart from the file it points to
//! if file_type_no_follow("48x48/actions/next.png") == Some(FileType::Symlink) {
//!     // already aliased
//! }
//! ```
//!
//! # Mutating
//!
//! ```ignore
//! use iconset_modernizer_core::file::{absolute_path, rename_file, symlink_file};
//!
//! rename_file("48x48/actions/next.png", "48x48/actions/go-next.png")?;
//! symlink_file(absolute_path("48x48/actions/go-next.png")?, "48x48/actions/next.png")?;
//! ```
//!
//! # Reading descriptors
//!
//! ```ignore
//! use iconset_modernizer_core::file::read_ini;
//!
//! let descriptor = read_ini("index.theme")?;
//! let dirs = descriptor.get_list("Icon Theme", "Directories");
//! ```

mod error;
mod info;
pub mod ini_support;
mod operations;
mod path;

pub use error::{FileError, FileErrorKind, FileResult};
pub use info::{FileType, file_type_no_follow, is_dir, is_file};
pub use ini_support::{IniValue, parse_ini, read_ini};
pub use operations::{read_text, rename_file, symlink_file, write_text};
pub use path::{absolute_path, normalize_path};
