use crate::domain::value_objects::{ProjectName, VersionTag};

/// Fully-populated description of one scaffold operation.
///
/// Assembled incrementally from prompt answers; complete before the
/// scaffolder runs and never mutated afterwards. One request exists per
/// `init` invocation and is discarded when the operation finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Target directory and manifest `name` field
    pub project_name: ProjectName,
    /// Manifest `description` field
    pub description: String,
    /// Manifest `author` field
    pub author: String,
    /// Selected template registry key
    pub template_key: String,
    /// Selected template version
    pub version: VersionTag,
}

impl ScaffoldRequest {
    /// Create a request from collected answers.
    pub fn new(
        project_name: ProjectName,
        description: impl Into<String>,
        author: impl Into<String>,
        template_key: impl Into<String>,
        version: VersionTag,
    ) -> Self {
        Self {
            project_name,
            description: description.into(),
            author: author.into(),
            template_key: template_key.into(),
            version,
        }
    }

    /// The manifest patch derived from this request.
    pub fn manifest_patch(&self) -> ManifestPatch {
        ManifestPatch {
            name: self.project_name.as_str().to_string(),
            description: self.description.clone(),
            author: self.author.clone(),
        }
    }
}

/// The three manifest fields overwritten after download.
///
/// All other manifest fields pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPatch {
    /// Value for the manifest `name` field
    pub name: String,
    /// Value for the manifest `description` field
    pub description: String,
    /// Value for the manifest `author` field
    pub author: String,
}
