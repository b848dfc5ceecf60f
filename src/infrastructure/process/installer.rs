use crate::common::error::ProgenError;
use crate::common::progress::StepProgress;
use crate::common::result::ProgenResult;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Installs a scaffolded project's dependencies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageInstaller: Send + Sync {
    /// Run the package manager's install command inside `project_dir`.
    ///
    /// Output is streamed to the terminal line by line as it arrives. A
    /// failure is reported with [`ProgenError::InstallFailed`], which is
    /// advisory: the scaffolded files already exist and the user can re-run
    /// the install manually.
    async fn install(&self, project_dir: &Path) -> ProgenResult<()>;
}

/// Installer that spawns `npm install` as a child process.
pub struct NpmInstaller {
    npm_executable: String,
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self {
            npm_executable: "npm".to_string(),
        }
    }
}

impl NpmInstaller {
    /// Create an installer using `npm` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an installer with a custom executable.
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            npm_executable: executable.into(),
        }
    }
}

#[async_trait]
impl PackageInstaller for NpmInstaller {
    async fn install(&self, project_dir: &Path) -> ProgenResult<()> {
        tracing::debug!(dir = %project_dir.display(), "installing dependencies");
        let mut progress = StepProgress::start_new("installing dependencies...");

        let spawned = Command::new(&self.npm_executable)
            .arg("install")
            .current_dir(project_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                progress.fail("dependency installation failed");
                return Err(ProgenError::install_failed(
                    format!("failed to spawn '{} install': {}", self.npm_executable, e),
                    None,
                ));
            }
        };

        // Streaming the two pipes is the only concurrent overlap in the
        // whole program; everything else is awaited sequentially.
        if let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) {
            let mut stdout_lines = BufReader::new(stdout).lines();
            let mut stderr_lines = BufReader::new(stderr).lines();
            let mut stdout_open = true;
            let mut stderr_open = true;

            while stdout_open || stderr_open {
                tokio::select! {
                    line = stdout_lines.next_line(), if stdout_open => {
                        match line {
                            Ok(Some(line)) => progress.print_line(&line),
                            _ => stdout_open = false,
                        }
                    }
                    line = stderr_lines.next_line(), if stderr_open => {
                        match line {
                            Ok(Some(line)) => progress.print_line(&line),
                            _ => stderr_open = false,
                        }
                    }
                }
            }
        }

        let status = match child.wait().await {
            Ok(status) => status,
            Err(e) => {
                progress.fail("dependency installation failed");
                return Err(ProgenError::install_failed(
                    format!("failed to wait for '{} install': {}", self.npm_executable, e),
                    None,
                ));
            }
        };

        if !status.success() {
            progress.fail("dependency installation failed");
            return Err(ProgenError::install_failed(
                format!(
                    "'{} install' exited with {}",
                    self.npm_executable,
                    status.code().map_or("signal".to_string(), |c| c.to_string())
                ),
                status.code(),
            ));
        }

        progress.succeed("dependencies installed");
        Ok(())
    }
}
