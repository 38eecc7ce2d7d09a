//! Directory classification.

use iconset_modernizer_core::logging::targets;

use super::mapping::CategoryMapping;
use super::types::{CategoryGroups, ThemeDirectory};

/// Group theme directories by the categories present in `mappings`.
///
/// Directories whose context names no mapped category are dropped, as are
/// repeated entries (first occurrence wins).
pub fn classify<'a, I>(directories: I, mappings: &[CategoryMapping]) -> CategoryGroups
where
    I: IntoIterator<Item = &'a ThemeDirectory>,
{
    let mut groups = CategoryGroups::new();

    for dir in directories {
        let Some(category) = dir
            .category()
            .filter(|c| mappings.iter().any(|m| m.category() == *c))
        else {
            tracing::trace!(
                target: targets::CLASSIFIER,
                directory = %dir.path,
                context = %dir.context,
                "directory has no mapped category"
            );
            continue;
        };

        if !groups.insert(category, dir.clone()) {
            tracing::debug!(
                target: targets::CLASSIFIER,
                directory = %dir.path,
                "skipping repeated directory"
            );
        }
    }

    groups
}
