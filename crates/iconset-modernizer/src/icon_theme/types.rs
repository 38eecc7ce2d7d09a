//! Core types for icon theme migration.
//!
//! - Icon categories that carry a legacy-name mapping
//! - Theme directories as declared by the descriptor
//! - Directories grouped by category, ready for the engine

use std::fmt;

/// Icon category with a legacy-name mapping.
///
/// Mirrors the freedesktop `Context` values of the directories that need
/// renaming. Other contexts (Apps, Places, ...) never had a legacy naming
/// scheme to migrate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconCategory {
    /// Icons for user actions (copy, save, navigation, ...)
    Actions,
    /// Hardware devices and media
    Devices,
    /// File type icons
    MimeTypes,
}

impl IconCategory {
    /// All categories, in migration order.
    pub const ALL: [IconCategory; 3] = [
        IconCategory::Actions,
        IconCategory::Devices,
        IconCategory::MimeTypes,
    ];

    /// The `Context` value naming this category in a descriptor.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::Actions => "Actions",
            IconCategory::Devices => "Devices",
            IconCategory::MimeTypes => "MimeTypes",
        }
    }

    /// Resolve a descriptor `Context` value.
    ///
    /// Matching is exact: `actions` or `Mimetypes` are not recognized.
    pub fn from_context(context: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == context)
    }
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A theme subdirectory as declared by the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeDirectory {
    /// Directory path relative to the theme root
    pub path: String,
    /// Declared `Context` value, verbatim
    pub context: String,
}

impl ThemeDirectory {
    /// Create a new theme directory entry.
    pub fn new(path: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            context: context.into(),
        }
    }

    /// The category this directory maps to, if any.
    pub fn category(&self) -> Option<IconCategory> {
        IconCategory::from_context(&self.context)
    }
}

/// Theme directories bucketed by category.
///
/// Categories are kept in [`IconCategory::ALL`] order and directories in
/// descriptor order, so iterating this yields the migration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroups {
    groups: Vec<(IconCategory, Vec<ThemeDirectory>)>,
}

impl CategoryGroups {
    /// Create empty groups for every category.
    pub fn new() -> Self {
        Self {
            groups: IconCategory::ALL.iter().map(|&c| (c, Vec::new())).collect(),
        }
    }

    /// Add a directory to its category. Returns false if it was already present.
    pub(crate) fn insert(&mut self, category: IconCategory, directory: ThemeDirectory) -> bool {
        let Some((_, dirs)) = self.groups.iter_mut().find(|(c, _)| *c == category) else {
            self.groups.push((category, vec![directory]));
            self.groups.sort_by_key(|(c, _)| *c);
            return true;
        };
        if dirs.iter().any(|d| d.path == directory.path) {
            return false;
        }
        dirs.push(directory);
        true
    }

    /// Directories of a category.
    pub fn directories(&self, category: IconCategory) -> &[ThemeDirectory] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, dirs)| dirs.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate categories with their directories, in migration order.
    pub fn iter(&self) -> impl Iterator<Item = (IconCategory, &[ThemeDirectory])> {
        self.groups.iter().map(|(c, dirs)| (*c, dirs.as_slice()))
    }

    /// Total number of directories across all categories.
    pub fn directory_count(&self) -> usize {
        self.groups.iter().map(|(_, dirs)| dirs.len()).sum()
    }

    /// Returns true if no directory belongs to any category.
    pub fn is_empty(&self) -> bool {
        self.directory_count() == 0
    }
}

impl Default for CategoryGroups {
    fn default() -> Self {
        Self::new()
    }
}
