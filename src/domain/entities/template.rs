use crate::common::error::ProgenError;
use crate::common::result::ProgenResult;
use std::collections::BTreeMap;
use url::Url;

/// Remote coordinate of a named project template.
///
/// Descriptors are immutable and defined when the registry is built; the
/// hosting provider is fixed to GitHub, matching the tag-listing API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// Registry key the user selects by
    pub key: String,
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl TemplateDescriptor {
    /// Create a descriptor.
    pub fn new(key: impl Into<String>, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// URL of the tag-listing API endpoint for this repository.
    pub fn tags_url(&self) -> ProgenResult<Url> {
        let raw = format!(
            "https://api.github.com/repos/{}/{}/tags",
            self.owner, self.repo
        );
        Url::parse(&raw)
            .map_err(|e| ProgenError::internal_error_with_source("invalid tags URL", e))
    }

    /// Clone URL of the template repository.
    pub fn clone_url(&self) -> String {
        format!("https://github.com/{}/{}.git", self.owner, self.repo)
    }
}

/// Immutable mapping from template key to repository coordinate.
///
/// The set of templates is fixed for the process lifetime; there is no
/// dynamic registration.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, TemplateDescriptor>,
}

impl TemplateRegistry {
    /// Build a registry from a list of descriptors.
    pub fn new(descriptors: Vec<TemplateDescriptor>) -> Self {
        let templates = descriptors
            .into_iter()
            .map(|d| (d.key.clone(), d))
            .collect();
        Self { templates }
    }

    /// The built-in template table.
    pub fn builtin() -> Self {
        Self::new(vec![
            TemplateDescriptor::new("antd-pro", "fluid-dev", "hexo-theme-fluid"),
            TemplateDescriptor::new("umi-hooks", "chuntungho", "free-mybatis-plugin"),
        ])
    }

    /// All template keys, in stable (sorted) order.
    pub fn keys(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    /// Look up a descriptor by key.
    ///
    /// Unknown keys fail with [`ProgenError::TemplateNotFound`]; callers must
    /// report the error and stop — no network or file operation may follow.
    pub fn resolve(&self, key: &str) -> ProgenResult<&TemplateDescriptor> {
        self.templates
            .get(key)
            .ok_or_else(|| ProgenError::template_not_found(key))
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_contents() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.keys(), vec!["antd-pro", "umi-hooks"]);

        let descriptor = registry.resolve("antd-pro").unwrap();
        assert_eq!(descriptor.owner, "fluid-dev");
        assert_eq!(descriptor.repo, "hexo-theme-fluid");
    }

    #[test]
    fn test_resolve_unknown_key() {
        let registry = TemplateRegistry::builtin();
        let result = registry.resolve("no-such-template");
        assert!(matches!(
            result,
            Err(ProgenError::TemplateNotFound { ref key }) if key == "no-such-template"
        ));
    }

    #[test]
    fn test_tags_url() {
        let descriptor = TemplateDescriptor::new("demo", "acme", "tmpl");
        let url = descriptor.tags_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/acme/tmpl/tags"
        );
    }

    #[test]
    fn test_clone_url() {
        let descriptor = TemplateDescriptor::new("demo", "acme", "tmpl");
        assert_eq!(descriptor.clone_url(), "https://github.com/acme/tmpl.git");
    }

    #[test]
    fn test_empty_registry() {
        let registry = TemplateRegistry::new(vec![]);
        assert!(registry.is_empty());
        assert!(registry.keys().is_empty());
    }
}
