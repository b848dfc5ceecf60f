use crate::common::error::ProgenError;
use crate::common::result::ProgenResult;
use crate::domain::entities::scaffold_request::ManifestPatch;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Name of the manifest file patched after download.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Reads and rewrites a scaffolded project's `package.json`.
///
/// Only the `name`, `author`, and `description` fields are overwritten;
/// every other field (dependencies, scripts, ...) passes through unchanged
/// and in its original position. Output is pretty-printed with 2-space
/// indentation, so re-applying the same patch is byte-stable.
pub struct ManifestStore;

impl ManifestStore {
    /// Create a store.
    pub fn new() -> Self {
        Self
    }

    /// Path of the manifest inside a project directory.
    pub fn manifest_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(MANIFEST_FILE_NAME)
    }

    /// Apply `patch` to the manifest in `project_dir`.
    ///
    /// A parse failure aborts before anything is written, so a malformed
    /// manifest is never replaced by an empty or truncated one.
    pub async fn patch(&self, project_dir: &Path, patch: &ManifestPatch) -> ProgenResult<()> {
        let path = self.manifest_path(project_dir);

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            ProgenError::manifest_read(
                format!("cannot read {}", path.display()),
                Some(path.clone()),
                Some(e),
            )
        })?;

        let mut manifest: Value = serde_json::from_str(&content).map_err(|e| {
            ProgenError::manifest_parse(
                format!("{} is not valid JSON", path.display()),
                Some(path.clone()),
                Some(e),
            )
        })?;

        let object = manifest.as_object_mut().ok_or_else(|| {
            ProgenError::manifest_parse(
                format!("{} is not a JSON object", path.display()),
                Some(path.clone()),
                None,
            )
        })?;

        object.insert("name".to_string(), Value::String(patch.name.clone()));
        object.insert("author".to_string(), Value::String(patch.author.clone()));
        object.insert(
            "description".to_string(),
            Value::String(patch.description.clone()),
        );

        // to_string_pretty uses 2-space indentation
        let mut serialized = serde_json::to_string_pretty(&manifest).map_err(|e| {
            ProgenError::manifest_write(
                "failed to serialize patched manifest",
                Some(path.clone()),
                Some(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
            )
        })?;
        serialized.push('\n');

        tracing::debug!(path = %path.display(), "writing patched manifest");
        tokio::fs::write(&path, serialized).await.map_err(|e| {
            ProgenError::manifest_write(
                format!("cannot write {}", path.display()),
                Some(path.clone()),
                Some(e),
            )
        })?;

        Ok(())
    }
}

impl Default for ManifestStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_patch() -> ManifestPatch {
        ManifestPatch {
            name: "myapp".to_string(),
            description: "a demo project".to_string(),
            author: "dev@example.com".to_string(),
        }
    }

    async fn write_manifest(dir: &Path, content: &str) {
        tokio::fs::write(dir.join(MANIFEST_FILE_NAME), content)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_patch_overwrites_only_target_fields() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(
            temp_dir.path(),
            r#"{
  "name": "template-name",
  "version": "1.0.0",
  "description": "template description",
  "author": "template author",
  "scripts": { "build": "webpack" },
  "dependencies": { "react": "^18.0.0" }
}"#,
        )
        .await;

        let store = ManifestStore::new();
        store.patch(temp_dir.path(), &sample_patch()).await.unwrap();

        let patched = tokio::fs::read_to_string(temp_dir.path().join(MANIFEST_FILE_NAME))
            .await
            .unwrap();
        let value: Value = serde_json::from_str(&patched).unwrap();

        assert_eq!(value["name"], "myapp");
        assert_eq!(value["description"], "a demo project");
        assert_eq!(value["author"], "dev@example.com");
        // Everything else passes through
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["scripts"]["build"], "webpack");
        assert_eq!(value["dependencies"]["react"], "^18.0.0");
    }

    #[tokio::test]
    async fn test_patch_preserves_field_order() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(
            temp_dir.path(),
            r#"{"name": "x", "version": "1.0.0", "license": "MIT"}"#,
        )
        .await;

        let store = ManifestStore::new();
        store.patch(temp_dir.path(), &sample_patch()).await.unwrap();

        let patched = tokio::fs::read_to_string(temp_dir.path().join(MANIFEST_FILE_NAME))
            .await
            .unwrap();
        let name_pos = patched.find("\"name\"").unwrap();
        let version_pos = patched.find("\"version\"").unwrap();
        let license_pos = patched.find("\"license\"").unwrap();
        assert!(name_pos < version_pos && version_pos < license_pos);
    }

    #[tokio::test]
    async fn test_patch_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(
            temp_dir.path(),
            r#"{"name": "x", "version": "2.1.0", "dependencies": {"vue": "^3.0.0"}}"#,
        )
        .await;

        let store = ManifestStore::new();
        let patch = sample_patch();

        store.patch(temp_dir.path(), &patch).await.unwrap();
        let first = tokio::fs::read_to_string(temp_dir.path().join(MANIFEST_FILE_NAME))
            .await
            .unwrap();

        store.patch(temp_dir.path(), &patch).await.unwrap();
        let second = tokio::fs::read_to_string(temp_dir.path().join(MANIFEST_FILE_NAME))
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_manifest_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = ManifestStore::new();
        let result = store.patch(temp_dir.path(), &sample_patch()).await;
        assert!(matches!(result, Err(ProgenError::ManifestRead { .. })));
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error_and_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let broken = "{ not json at all";
        write_manifest(temp_dir.path(), broken).await;

        let store = ManifestStore::new();
        let result = store.patch(temp_dir.path(), &sample_patch()).await;
        assert!(matches!(result, Err(ProgenError::ManifestParse { .. })));

        // The broken file must not have been replaced
        let content = tokio::fs::read_to_string(temp_dir.path().join(MANIFEST_FILE_NAME))
            .await
            .unwrap();
        assert_eq!(content, broken);
    }

    #[tokio::test]
    async fn test_non_object_manifest_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), "[1, 2, 3]").await;

        let store = ManifestStore::new();
        let result = store.patch(temp_dir.path(), &sample_patch()).await;
        assert!(matches!(result, Err(ProgenError::ManifestParse { .. })));
    }

    #[tokio::test]
    async fn test_adds_missing_fields() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), r#"{"version": "0.1.0"}"#).await;

        let store = ManifestStore::new();
        store.patch(temp_dir.path(), &sample_patch()).await.unwrap();

        let patched = tokio::fs::read_to_string(temp_dir.path().join(MANIFEST_FILE_NAME))
            .await
            .unwrap();
        let value: Value = serde_json::from_str(&patched).unwrap();
        assert_eq!(value["name"], "myapp");
        assert_eq!(value["author"], "dev@example.com");
    }
}
