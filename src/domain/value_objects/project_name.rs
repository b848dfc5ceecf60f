use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced while validating a project name
#[derive(Debug, Error, PartialEq)]
pub enum ProjectNameError {
    /// The name was empty or whitespace only
    #[error("project name must not be empty")]
    Empty,

    /// The name exceeded the maximum length
    #[error("project name too long ({0} characters, maximum is 214)")]
    TooLong(usize),

    /// The name contained a character outside the allowed set
    #[error("invalid characters in project name: {0}")]
    InvalidCharacters(String),

    /// The name would escape the working directory
    #[error("project name must not contain path separators: {0}")]
    PathTraversal(String),
}

/// Validated project name value object.
///
/// The name doubles as the target directory name and the manifest `name`
/// field, so it must be a single safe path component. Length and character
/// rules follow npm package-name restrictions, since the scaffolded manifest
/// is a `package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a raw name.
    pub fn new(name: &str) -> Result<Self, ProjectNameError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(ProjectNameError::Empty);
        }

        // npm caps package names at 214 characters
        if trimmed.len() > 214 {
            return Err(ProjectNameError::TooLong(trimmed.len()));
        }

        if trimmed.contains('/') || trimmed.contains('\\') || trimmed.contains("..") {
            return Err(ProjectNameError::PathTraversal(trimmed.to_string()));
        }

        let allowed = Regex::new(r"^[a-zA-Z0-9@._-]+$").expect("static pattern is valid");
        if !allowed.is_match(trimmed) {
            return Err(ProjectNameError::InvalidCharacters(trimmed.to_string()));
        }

        if trimmed.starts_with('.') {
            return Err(ProjectNameError::InvalidCharacters(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The validated name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
