use crate::common::error::ProgenError;
use crate::common::progress::StepProgress;
use crate::common::result::ProgenResult;
use crate::domain::entities::scaffold_request::ScaffoldRequest;
use crate::domain::entities::template::TemplateRegistry;
use crate::infrastructure::filesystem::ManifestStore;
use crate::infrastructure::git::TemplateSource;
use crate::infrastructure::process::PackageInstaller;
use std::path::PathBuf;

/// Scaffold configuration.
#[derive(Debug, Clone)]
pub struct ScaffoldProjectConfig {
    /// Directory the new project is created in
    pub working_dir: PathBuf,
}

impl ScaffoldProjectConfig {
    /// Configuration targeting the given working directory.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }
}

/// Outcome of a successful scaffold.
#[derive(Debug)]
pub struct ScaffoldResult {
    /// Absolute path of the created project directory
    pub project_dir: PathBuf,
    /// Install failure message, if dependency installation failed.
    ///
    /// Install failures are advisory: the project files already exist, so
    /// the scaffold as a whole still counts as successful.
    pub install_error: Option<String>,
}

/// Orchestrates the download-and-patch sequence.
///
/// Steps run strictly in order, each a hard dependency on the prior:
/// name-collision check, template download, manifest patch, dependency
/// install. There is no rollback: a directory created by a step that later
/// fails stays on disk, and the error message says so.
pub struct ScaffoldProjectUseCase {
    config: ScaffoldProjectConfig,
    template_source: Box<dyn TemplateSource>,
    installer: Box<dyn PackageInstaller>,
    manifest_store: ManifestStore,
}

impl ScaffoldProjectUseCase {
    /// Create the use case with its collaborators.
    pub fn new(
        config: ScaffoldProjectConfig,
        template_source: Box<dyn TemplateSource>,
        installer: Box<dyn PackageInstaller>,
    ) -> Self {
        Self {
            config,
            template_source,
            installer,
            manifest_store: ManifestStore::new(),
        }
    }

    /// Execute the scaffold sequence for `request`.
    pub async fn execute(
        &self,
        registry: &TemplateRegistry,
        request: &ScaffoldRequest,
    ) -> ProgenResult<ScaffoldResult> {
        // Resolving must precede any network or file operation
        let descriptor = registry.resolve(&request.template_key)?;

        self.check_name_free(request).await?;

        let project_dir = self.config.working_dir.join(request.project_name.as_str());

        let mut progress = StepProgress::start_new(format!(
            "downloading {}@{}...",
            request.template_key, request.version
        ));
        match self
            .template_source
            .fetch(descriptor, &request.version, &project_dir)
            .await
        {
            Ok(()) => progress.succeed("template downloaded"),
            Err(e) => {
                progress.fail("template download failed");
                return Err(e);
            }
        }

        self.manifest_store
            .patch(&project_dir, &request.manifest_patch())
            .await?;

        // Advisory step: the project exists whether or not this succeeds
        let install_error = match self.installer.install(&project_dir).await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, "dependency installation failed");
                Some(e.to_string())
            }
        };

        Ok(ScaffoldResult {
            project_dir,
            install_error,
        })
    }

    /// Fail with `AlreadyExists` when the working directory already has an
    /// entry with the requested name. A plain existence check, nothing
    /// recursive.
    async fn check_name_free(&self, request: &ScaffoldRequest) -> ProgenResult<()> {
        let name = request.project_name.as_str();
        let mut entries = tokio::fs::read_dir(&self.config.working_dir)
            .await
            .map_err(|e| {
                ProgenError::filesystem_error_with_source(
                    format!("cannot read {}", self.config.working_dir.display()),
                    Some(self.config.working_dir.clone()),
                    e,
                )
            })?;

        while let Some(entry) = entries.next_entry().await? {
            if entry.file_name().to_string_lossy() == name {
                return Err(ProgenError::already_exists(
                    name,
                    self.config.working_dir.clone(),
                ));
            }
        }

        Ok(())
    }
}
