use crate::common::error::ProgenError;
use crate::common::result::ProgenResult;
use crate::domain::entities::template::TemplateDescriptor;
use crate::domain::value_objects::VersionTag;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Downloads a template repository at a specific version into a directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Materialize `descriptor` at `version` into `dest_path`.
    ///
    /// Any failure, including a partial transfer, aborts with
    /// [`ProgenError::DownloadFailed`]; no retry is attempted and a partially
    /// written directory is left on disk for the caller to report.
    async fn fetch(
        &self,
        descriptor: &TemplateDescriptor,
        version: &VersionTag,
        dest_path: &Path,
    ) -> ProgenResult<()>;
}

/// Template source that shells out to the system `git`.
///
/// The clone is shallow and pinned to the requested tag; the `.git`
/// directory is removed afterwards so the scaffold starts without the
/// template's history.
pub struct GitTemplateSource {
    git_executable: String,
}

impl Default for GitTemplateSource {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
        }
    }
}

impl GitTemplateSource {
    /// Create a source using `git` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source with a custom git executable path.
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
        }
    }

    /// Check that the git executable is available.
    pub async fn check_availability(&self) -> ProgenResult<()> {
        let output = Command::new(&self.git_executable)
            .arg("--version")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                ProgenError::download_failed_with_source(
                    format!("git executable '{}' not found", self.git_executable),
                    None,
                    e,
                )
            })?;

        if !output.status.success() {
            return Err(ProgenError::download_failed(
                format!("git executable '{}' not usable", self.git_executable),
                None,
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl TemplateSource for GitTemplateSource {
    async fn fetch(
        &self,
        descriptor: &TemplateDescriptor,
        version: &VersionTag,
        dest_path: &Path,
    ) -> ProgenResult<()> {
        let clone_url = descriptor.clone_url();
        let dest = dest_path.to_str().ok_or_else(|| {
            ProgenError::download_failed("destination path is not valid UTF-8", None)
        })?;

        tracing::debug!(url = %clone_url, tag = %version, dest = %dest, "cloning template");

        let output = Command::new(&self.git_executable)
            .args([
                "clone",
                "--depth",
                "1",
                "--branch",
                version.as_str(),
                &clone_url,
                dest,
            ])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                ProgenError::download_failed_with_source(
                    "failed to spawn git clone",
                    Some(clone_url.clone()),
                    e,
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProgenError::download_failed(
                format!("git clone failed: {}", stderr.trim()),
                Some(clone_url),
            ));
        }

        // Drop the template's history; the scaffold starts fresh
        let git_dir = dest_path.join(".git");
        if git_dir.exists() {
            tokio::fs::remove_dir_all(&git_dir).await.map_err(|e| {
                ProgenError::download_failed_with_source(
                    "failed to remove template .git directory",
                    Some(descriptor.clone_url()),
                    e,
                )
            })?;
        }

        Ok(())
    }
}
