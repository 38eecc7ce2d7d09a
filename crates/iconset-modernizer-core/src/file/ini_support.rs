//! INI file parsing.
//!
//! Thin wrapper over `rust-ini` tuned for descriptor files such as
//! `index.theme`:
//!
//! - Section names are case-sensitive, keys are not (`Context` and `context`
//!   name the same key).
//! - Quotes and backslashes are taken literally.
//! - A section that appears more than once is merged, later keys winning.
//!
//! # Example
//!
//! ```ignore
//! use iconset_modernizer_core::file::ini_support::parse_ini;
//!
//! let value = parse_ini("[Icon Theme]\nDirectories=48x48/actions\n")?;
//! assert_eq!(value.get("Icon Theme", "directories"), Some("48x48/actions"));
//! ```

use std::collections::HashMap;
use std::path::Path;

use ini::{Ini, ParseOption};

use super::error::{FileError, FileResult};
use super::operations::read_text;

/// A parsed INI document with section/key lookup.
///
/// Keys outside any section are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IniValue {
    /// Section name -> (lowercased key -> value)
    sections: HashMap<String, HashMap<String, String>>,
}

impl IniValue {
    fn from_ini(ini: &Ini) -> Self {
        let mut value = Self::default();

        for (section, props) in ini.iter() {
            let Some(name) = section else {
                continue;
            };
            let target = value.sections.entry(name.to_string()).or_default();
            for (key, val) in props.iter() {
                target.insert(key.to_lowercase(), val.to_string());
            }
        }

        value
    }

    /// Returns true if a section exists.
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Gets the value of `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(&key.to_lowercase()))
            .map(String::as_str)
    }

    /// Gets a value split on commas, trimmed, with empty items dropped.
    pub fn get_list(&self, section: &str, key: &str) -> Option<Vec<&str>> {
        self.get(section, key).map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .collect()
        })
    }
}

fn parse_options() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

/// Parses an INI string into an [`IniValue`].
pub fn parse_ini(s: &str) -> FileResult<IniValue> {
    let ini = Ini::load_from_str_opt(s, parse_options())
        .map_err(|e| FileError::invalid_data(None, e.to_string()))?;
    Ok(IniValue::from_ini(&ini))
}

/// Reads and parses an INI file into an [`IniValue`].
pub fn read_ini(path: impl AsRef<Path>) -> FileResult<IniValue> {
    let path = path.as_ref();
    let content = read_text(path)?;
    let ini = Ini::load_from_str_opt(&content, parse_options())
        .map_err(|e| FileError::invalid_data(Some(path.to_path_buf()), e.to_string()))?;
    let value = IniValue::from_ini(&ini);
    tracing::trace!(
        target: crate::logging::targets::DESCRIPTOR,
        path = %path.display(),
        sections = value.sections.len(),
        "parsed ini file"
    );
    Ok(value)
}
