//! Package layout: which manifest and binary names a package must carry.
//!
//! The default layout is what the edge runtime expects. A custom layout can
//! be loaded from YAML:
//!
//! ```yaml
//! manifest: fastly.toml
//! binary: main.wasm
//! ```
//!
//! Keys left out keep their defaults.

use std::fs;
use std::path::Path;

use edge_core::error::{CoreError, Result};
use serde::Deserialize;
use tracing::debug;

use crate::required::RequiredFiles;

pub const DEFAULT_MANIFEST: &str = "fastly.toml";
pub const DEFAULT_BINARY: &str = "main.wasm";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageLayout {
    manifest: String,
    binary: String,
}

impl Default for PackageLayout {
    fn default() -> Self {
        Self {
            manifest: DEFAULT_MANIFEST.to_string(),
            binary: DEFAULT_BINARY.to_string(),
        }
    }
}

impl PackageLayout {
    pub fn new(manifest: impl Into<String>, binary: impl Into<String>) -> Result<Self> {
        let layout = Self {
            manifest: manifest.into(),
            binary: binary.into(),
        };
        layout.validate()?;
        Ok(layout)
    }

    pub fn manifest(&self) -> &str {
        &self.manifest
    }

    /// The entry whose content is hashed.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// A fresh required set for one scan: manifest first, then binary.
    pub fn required_files(&self) -> RequiredFiles {
        RequiredFiles::new([self.manifest.as_str(), self.binary.as_str()])
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let layout: Self = serde_yaml_ng::from_str(contents)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load a layout file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading package layout from: {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&contents)
    }

    // Entry names are compared against the final path component, so a
    // name with a separator could never match.
    fn validate(&self) -> Result<()> {
        for (field, name) in [("manifest", &self.manifest), ("binary", &self.binary)] {
            if name.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "Layout field '{field}' cannot be empty"
                )));
            }
            if name.contains('/') {
                return Err(CoreError::Validation(format!(
                    "Layout field '{field}' must be a file name, got '{name}'"
                )));
            }
        }
        if self.manifest == self.binary {
            return Err(CoreError::Validation(format!(
                "Layout manifest and binary must differ, both are '{}'",
                self.manifest
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = PackageLayout::default();
        assert_eq!(layout.manifest(), "fastly.toml");
        assert_eq!(layout.binary(), "main.wasm");

        let required = layout.required_files();
        assert_eq!(required.missing(), vec!["fastly.toml", "main.wasm"]);
    }

    #[test]
    fn test_yaml_overrides_and_defaults() {
        let layout = PackageLayout::from_yaml_str("binary: app.wasm\n").unwrap();
        assert_eq!(layout.manifest(), "fastly.toml");
        assert_eq!(layout.binary(), "app.wasm");

        let layout =
            PackageLayout::from_yaml_str("manifest: edge.toml\nbinary: bin.wasm\n").unwrap();
        assert_eq!(layout, PackageLayout::new("edge.toml", "bin.wasm").unwrap());
    }

    #[test]
    fn test_yaml_rejects_unknown_keys() {
        let err = PackageLayout::from_yaml_str("binary: a.wasm\nextra: 1\n").unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn test_invalid_layouts() {
        assert!(matches!(
            PackageLayout::new("", "main.wasm"),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            PackageLayout::new("fastly.toml", "bin/main.wasm"),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            PackageLayout::new("main.wasm", "main.wasm"),
            Err(CoreError::Validation(_))
        ));
        assert!(PackageLayout::from_yaml_str("binary: fastly.toml\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.yaml");
        fs::write(&path, "manifest: service.toml\n").unwrap();

        let layout = PackageLayout::load(&path).unwrap();
        assert_eq!(layout.manifest(), "service.toml");
        assert_eq!(layout.binary(), "main.wasm");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PackageLayout::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
