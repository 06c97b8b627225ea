//! Manifest reading and writing
//!
//! The manifest is a JSON document with a top-level string field holding the
//! version. Only that field is rewritten; sibling fields and their order are
//! preserved. Persistence goes through a temp-file-then-rename step so the
//! manifest is never observed half-written, and every failure is detected
//! before the rename.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::Version;
use crate::error::{MdtVersionError, Result};

/// Handle on a JSON manifest's version field
pub struct Manifest {
    path: PathBuf,
    field: String,
}

impl Manifest {
    /// Create a handle for the manifest at `path`, versioned by `field`
    pub fn new(path: impl Into<PathBuf>, field: impl Into<String>) -> Self {
        Manifest {
            path: path.into(),
            field: field.into(),
        }
    }

    /// The manifest path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the manifest document
    fn read_document(&self) -> Result<Value> {
        if !self.path.exists() {
            return Err(MdtVersionError::ManifestNotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Read the current version from the manifest
    ///
    /// # Returns
    /// * `Ok(Version)` - Parsed from the configured field
    /// * `Err(ManifestNotFound)` - The path does not exist
    /// * `Err(MissingVersionField)` - The field is absent or not a string
    /// * `Err(InvalidVersionFormat)` - The field's string is outside the grammar
    pub fn read_version(&self) -> Result<Version> {
        let doc = self.read_document()?;
        let version_str = doc
            .get(&self.field)
            .and_then(|v| v.as_str())
            .ok_or_else(|| MdtVersionError::missing_field(&self.path, &self.field))?;
        Version::parse(version_str)
    }

    /// Render the document with the version field replaced
    ///
    /// Used both for the real write and for dry-run display; never touches
    /// the file.
    pub fn render_with(&self, version: &Version) -> Result<String> {
        let mut doc = self.read_document()?;
        match doc.as_object_mut() {
            Some(obj) if obj.get(&self.field).map_or(false, Value::is_string) => {
                obj.insert(self.field.clone(), Value::String(version.to_string()));
            }
            _ => return Err(MdtVersionError::missing_field(&self.path, &self.field)),
        }
        let mut rendered = serde_json::to_string_pretty(&doc)?;
        rendered.push('\n');
        Ok(rendered)
    }

    /// Write the new version back to the manifest
    ///
    /// Renders the full document first, then persists via a sibling temp file
    /// and an atomic rename.
    pub fn write_version(&self, version: &Version) -> Result<()> {
        let rendered = self.render_with(version)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &rendered)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("plugin.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_version() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"name": "mdt", "version": "0.11.0-beta.2"}"#);

        let manifest = Manifest::new(&path, "version");
        let version = manifest.read_version().unwrap();
        assert_eq!(version.to_string(), "0.11.0-beta.2");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let manifest = Manifest::new(dir.path().join("absent.json"), "version");
        let err = manifest.read_version().unwrap_err();
        assert!(matches!(err, MdtVersionError::ManifestNotFound(_)));
    }

    #[test]
    fn test_read_missing_field() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"name": "mdt"}"#);

        let manifest = Manifest::new(&path, "version");
        let err = manifest.read_version().unwrap_err();
        assert!(matches!(err, MdtVersionError::MissingVersionField { .. }));
    }

    #[test]
    fn test_read_non_string_field() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"version": 11}"#);

        let manifest = Manifest::new(&path, "version");
        let err = manifest.read_version().unwrap_err();
        assert!(matches!(err, MdtVersionError::MissingVersionField { .. }));
    }

    #[test]
    fn test_read_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "{not json");

        let manifest = Manifest::new(&path, "version");
        assert!(matches!(
            manifest.read_version().unwrap_err(),
            MdtVersionError::Json(_)
        ));
    }

    #[test]
    fn test_write_version_replaces_only_field() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            r#"{"name": "mdt", "version": "0.11.0", "description": "workflows"}"#,
        );

        let manifest = Manifest::new(&path, "version");
        let next = Version::parse("0.12.0").unwrap();
        manifest.write_version(&next).unwrap();

        let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["version"], "0.12.0");
        assert_eq!(doc["name"], "mdt");
        assert_eq!(doc["description"], "workflows");
    }

    #[test]
    fn test_write_preserves_field_order() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"zebra": 1, "version": "1.0.0-rc", "apple": 2}"#);

        let manifest = Manifest::new(&path, "version");
        manifest.write_version(&Version::parse("1.0.0").unwrap()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let zebra = content.find("zebra").unwrap();
        let version = content.find("version").unwrap();
        let apple = content.find("apple").unwrap();
        assert!(zebra < version && version < apple);
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"version": "1.0.0"}"#);

        let manifest = Manifest::new(&path, "version");
        manifest
            .write_version(&Version::parse("1.1.0").unwrap())
            .unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("plugin.json")]);
    }

    #[test]
    fn test_render_with_does_not_touch_file() {
        let dir = TempDir::new().unwrap();
        let content = r#"{"version": "1.0.0"}"#;
        let path = write_manifest(&dir, content);

        let manifest = Manifest::new(&path, "version");
        let rendered = manifest.render_with(&Version::parse("1.1.0").unwrap()).unwrap();
        assert!(rendered.contains("1.1.0"));
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_custom_field_name() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"pluginVersion": "2.0.0"}"#);

        let manifest = Manifest::new(&path, "pluginVersion");
        assert_eq!(manifest.read_version().unwrap().to_string(), "2.0.0");
    }
}
