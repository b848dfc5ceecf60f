//! Hand-written test doubles for the infrastructure seams.

use async_trait::async_trait;
use progen::common::error::ProgenError;
use progen::domain::entities::template::TemplateDescriptor;
use progen::domain::value_objects::VersionTag;
use progen::infrastructure::git::TemplateSource;
use progen::infrastructure::github::TagSource;
use progen::common::result::ProgenResult;
use progen::infrastructure::process::PackageInstaller;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::test_fixtures;

/// Tag source serving a fixed tag list, or a fixed failure.
pub struct FakeTagSource {
    outcome: Result<Vec<VersionTag>, String>,
}

impl FakeTagSource {
    /// A source that returns the given tags in order.
    pub fn with_tags(tags: &[&str]) -> Self {
        Self {
            outcome: Ok(tags.iter().map(|t| VersionTag::from(*t)).collect()),
        }
    }

    /// A source that fails every fetch with a network error.
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl TagSource for FakeTagSource {
    async fn fetch_tags(&self, _descriptor: &TemplateDescriptor) -> ProgenResult<Vec<VersionTag>> {
        match &self.outcome {
            Ok(tags) => Ok(tags.clone()),
            Err(message) => Err(ProgenError::network_error(message.clone(), None)),
        }
    }
}

/// Template source that writes a fixture project instead of cloning, and
/// records what it was asked for.
pub struct FakeTemplateSource {
    pub fetches: Arc<Mutex<Vec<(String, String)>>>,
}

impl FakeTemplateSource {
    pub fn new() -> Self {
        Self {
            fetches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The `(owner/repo, tag)` pairs fetched so far.
    pub fn recorded_fetches(&self) -> Vec<(String, String)> {
        self.fetches.lock().unwrap().clone()
    }
}

#[async_trait]
impl TemplateSource for FakeTemplateSource {
    async fn fetch(
        &self,
        descriptor: &TemplateDescriptor,
        version: &VersionTag,
        dest_path: &Path,
    ) -> ProgenResult<()> {
        self.fetches.lock().unwrap().push((
            format!("{}/{}", descriptor.owner, descriptor.repo),
            version.to_string(),
        ));
        test_fixtures::write_template_project(dest_path)?;
        Ok(())
    }
}

/// Installer that records its invocations instead of spawning a process.
pub struct RecordingInstaller {
    pub invocations: Arc<Mutex<Vec<PathBuf>>>,
    fail: bool,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// An installer whose install step always fails.
    pub fn failing() -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// Directories installs were attempted in so far.
    pub fn recorded_installs(&self) -> Vec<PathBuf> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl PackageInstaller for RecordingInstaller {
    async fn install(&self, project_dir: &Path) -> ProgenResult<()> {
        self.invocations.lock().unwrap().push(project_dir.to_path_buf());
        if self.fail {
            Err(ProgenError::install_failed("install exited with 1", Some(1)))
        } else {
            Ok(())
        }
    }
}
