//! Theme descriptor (`index.theme`) reading.
//!
//! Only the parts of the freedesktop descriptor the migration depends on are
//! read: the directory list and each directory's `Context`. Size, scale and
//! threshold keys are ignored.

use std::path::Path;

use iconset_modernizer_core::file::{IniValue, parse_ini, read_ini};
use iconset_modernizer_core::logging::targets;

use super::types::ThemeDirectory;
use crate::{Error, Result};

/// File name of a theme descriptor inside the theme root.
pub const DESCRIPTOR_FILE: &str = "index.theme";

/// Section holding theme-wide keys.
pub const THEME_SECTION: &str = "Icon Theme";

/// Parsed theme descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDescriptor {
    /// Human-readable theme name
    pub name: String,
    /// Parent themes
    pub inherits: Vec<String>,
    /// Declared directories, de-duplicated, in declaration order
    pub directories: Vec<ThemeDirectory>,
}

impl ThemeDescriptor {
    /// Read a descriptor file.
    ///
    /// The theme name falls back to the name of the directory holding the
    /// descriptor.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ini = read_ini(path)?;
        let fallback = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        Self::from_ini(&ini, fallback)
    }

    /// Parse descriptor text.
    pub fn parse(content: &str, fallback_name: &str) -> Result<Self> {
        let ini = parse_ini(content)?;
        Self::from_ini(&ini, fallback_name)
    }

    /// Build a descriptor from parsed INI data.
    ///
    /// `Directories` is required and every directory it lists must have a
    /// section with a `Context` key. `ScaledDirectories` entries are appended
    /// when present; one without a section is skipped.
    pub fn from_ini(ini: &IniValue, fallback_name: &str) -> Result<Self> {
        if !ini.has_section(THEME_SECTION) {
            return Err(Error::malformed(THEME_SECTION, "Directories"));
        }

        let listed = ini
            .get_list(THEME_SECTION, "Directories")
            .ok_or_else(|| Error::malformed(THEME_SECTION, "Directories"))?;
        let scaled = ini
            .get_list(THEME_SECTION, "ScaledDirectories")
            .unwrap_or_default();

        let mut directories: Vec<ThemeDirectory> = Vec::with_capacity(listed.len());
        for dir in listed {
            if is_repeated(&directories, dir) {
                continue;
            }
            let context = ini
                .get(dir, "Context")
                .ok_or_else(|| Error::malformed(dir, "Context"))?;
            directories.push(ThemeDirectory::new(dir, context));
        }
        // Scaled entries are optional: one without a section is ignored.
        for dir in scaled {
            if is_repeated(&directories, dir) {
                continue;
            }
            if !ini.has_section(dir) {
                tracing::debug!(
                    target: targets::DESCRIPTOR,
                    directory = dir,
                    "scaled directory has no section, skipping"
                );
                continue;
            }
            let context = ini
                .get(dir, "Context")
                .ok_or_else(|| Error::malformed(dir, "Context"))?;
            directories.push(ThemeDirectory::new(dir, context));
        }

        let name = ini
            .get(THEME_SECTION, "Name")
            .filter(|n| !n.is_empty())
            .unwrap_or(fallback_name)
            .to_string();
        let inherits = ini
            .get_list(THEME_SECTION, "Inherits")
            .unwrap_or_default()
            .into_iter()
            .map(String::from)
            .collect();

        tracing::debug!(
            target: targets::DESCRIPTOR,
            theme = %name,
            directories = directories.len(),
            "read theme descriptor"
        );

        Ok(Self {
            name,
            inherits,
            directories,
        })
    }
}

fn is_repeated(directories: &[ThemeDirectory], dir: &str) -> bool {
    let repeated = directories.iter().any(|d| d.path == dir);
    if repeated {
        tracing::debug!(
            target: targets::DESCRIPTOR,
            directory = dir,
            "ignoring repeated directory entry"
        );
    }
    repeated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_descriptor() {
        let desc = ThemeDescriptor::parse(
            "[Icon Theme]
Name=Crystal
Inherits=hicolor, default
Directories=16x16/actions,16x16/apps

[16x16/actions]
Size=16
Context=Actions

[16x16/apps]
Size=16
Context=Applications
",
            "crystal",
        )
        .unwrap();

        assert_eq!(desc.name, "Crystal");
        assert_eq!(desc.inherits, vec!["hicolor", "default"]);
        assert_eq!(
            desc.directories,
            vec![
                ThemeDirectory::new("16x16/actions", "Actions"),
                ThemeDirectory::new("16x16/apps", "Applications"),
            ]
        );
    }

    #[test]
    fn test_repeated_and_scaled_directories() {
        let desc = ThemeDescriptor::parse(
            "[Icon Theme]
Directories=22x22/devices,22x22/devices
ScaledDirectories=22x22@2/devices,22x22/devices

[22x22/devices]
Context=Devices

[22x22@2/devices]
Context=Devices
",
            "theme",
        )
        .unwrap();

        let paths: Vec<_> = desc.directories.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["22x22/devices", "22x22@2/devices"]);
        assert_eq!(desc.name, "theme");
    }

    #[test]
    fn test_missing_theme_section() {
        let err = ThemeDescriptor::parse("[Other]\nKey=1\n", "t").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedDescriptor { ref section, ref key }
                if section == "Icon Theme" && key == "Directories"
        ));
    }

    #[test]
    fn test_missing_directories_key() {
        let err = ThemeDescriptor::parse("[Icon Theme]\nName=x\n", "t").unwrap_err();
        assert!(matches!(err, Error::MalformedDescriptor { ref key, .. } if key == "Directories"));
    }

    #[test]
    fn test_missing_directory_context() {
        let err = ThemeDescriptor::parse(
            "[Icon Theme]\nDirectories=48x48/actions\n\n[48x48/actions]\nSize=48\n",
            "t",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedDescriptor { ref section, ref key }
                if section == "48x48/actions" && key == "Context"
        ));
    }

    #[test]
    fn test_missing_directory_section() {
        let err =
            ThemeDescriptor::parse("[Icon Theme]\nDirectories=48x48/actions\n", "t").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedDescriptor { ref section, .. } if section == "48x48/actions"
        ));
    }

    #[test]
    fn test_scaled_directory_without_section_is_skipped() {
        let desc = ThemeDescriptor::parse(
            "[Icon Theme]\nDirectories=x\nScaledDirectories=y\n[x]\nContext=Actions\n",
            "t",
        )
        .unwrap();
        assert_eq!(desc.directories, vec![ThemeDirectory::new("x", "Actions")]);
    }

    #[test]
    fn test_scaled_directory_section_without_context() {
        let err = ThemeDescriptor::parse(
            "[Icon Theme]\nDirectories=x\nScaledDirectories=y\n[x]\nContext=Actions\n[y]\nSize=8\n",
            "t",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedDescriptor { ref section, ref key }
                if section == "y" && key == "Context"
        ));
    }

    #[test]
    fn test_load_uses_directory_name() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nuvola");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(
            root.join(DESCRIPTOR_FILE),
            "[Icon Theme]\nDirectories=32x32/mimetypes\n\n[32x32/mimetypes]\nContext=MimeTypes\n",
        )
        .unwrap();

        let desc = ThemeDescriptor::load(root.join(DESCRIPTOR_FILE)).unwrap();
        assert_eq!(desc.name, "nuvola");
        assert_eq!(desc.directories[0].context, "MimeTypes");
    }
}
