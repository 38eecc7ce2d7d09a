//! Icon theme model for the migration.
//!
//! This module covers everything the engine consumes:
//!
//! - **Descriptor**: reading `index.theme` into declared directories
//! - **Categories**: the icon contexts that have a legacy naming scheme
//! - **Mapping table**: legacy → standardized names per category
//! - **Classification**: bucketing declared directories by category
//!
//! # Example
//!
//! ```ignore
//! use iconset_modernizer::icon_theme::{classify, ThemeDescriptor, BUILTIN_MAPPINGS};
//!
//! let descriptor = ThemeDescriptor::load("index.theme")?;
//! let groups = classify(&descriptor.directories, &BUILTIN_MAPPINGS);
//! for (category, dirs) in groups.iter() {
//!     println!("{}: {} directories", category, dirs.len());
//! }
//! ```

mod classifier;
mod descriptor;
mod mapping;
mod types;

pub use classifier::classify;
pub use descriptor::{DESCRIPTOR_FILE, THEME_SECTION, ThemeDescriptor};
pub use mapping::{BUILTIN_MAPPINGS, CategoryMapping, builtin_mapping};
pub use types::{CategoryGroups, IconCategory, ThemeDirectory};
