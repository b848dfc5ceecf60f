//! Command-line interface: argument parsing and subcommand dispatch.

pub mod output;
pub mod prompts;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use std::env;
use std::process::exit;

use crate::application::use_cases::{
    ListVersionsUseCase, ScaffoldProjectConfig, ScaffoldProjectUseCase,
};
use crate::common::error::ProgenError;
use crate::common::result::ProgenResult;
use crate::domain::entities::scaffold_request::ScaffoldRequest;
use crate::domain::entities::template::TemplateRegistry;
use crate::infrastructure::git::GitTemplateSource;
use crate::infrastructure::github::GithubTagClient;
use crate::infrastructure::process::NpmInstaller;

/// progen - scaffold new projects from versioned git templates
#[derive(Parser)]
#[command(name = "progen")]
#[command(about = "Scaffold new projects from versioned git templates")]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project from a template
    Init {
        /// Project name (skips the name prompt when given)
        name: Option<String>,
    },

    /// List the available versions of a template
    List {
        /// Template name (prompts for one when omitted)
        name: Option<String>,
    },
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    /// Parse arguments and build the application.
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    /// Dispatch the invoked subcommand.
    ///
    /// Any step failure prints a colored error and exits non-zero. Install
    /// failures are the exception: the project already exists, so they only
    /// produce a warning.
    pub async fn run(self) -> anyhow::Result<()> {
        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                if leaves_partial_directory(&e) {
                    output::warn("the partially created project directory was left in place");
                }
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> ProgenResult<()> {
        match &self.cli.command {
            Commands::Init { name } => self.handle_init_command(name.as_deref()).await,
            Commands::List { name } => self.handle_list_command(name.as_deref()).await,
        }
    }

    /// `init [name]`: answers -> tag fetch -> version prompt -> scaffold.
    async fn handle_init_command(&self, name: Option<&str>) -> ProgenResult<()> {
        let registry = TemplateRegistry::builtin();

        let answers = prompts::collect_initial_answers(name, &registry.keys())?;
        let descriptor = registry.resolve(&answers.template_key)?;

        let versions = ListVersionsUseCase::new(Box::new(GithubTagClient::new()))
            .execute(descriptor)
            .await?;
        let version = prompts::collect_version(&versions)?;

        let request = ScaffoldRequest::new(
            answers.project_name,
            answers.description,
            answers.author,
            answers.template_key,
            version,
        );

        let template_source = GitTemplateSource::new();
        template_source.check_availability().await?;

        let working_dir = env::current_dir()?;
        let use_case = ScaffoldProjectUseCase::new(
            ScaffoldProjectConfig::new(working_dir),
            Box::new(template_source),
            Box::new(NpmInstaller::new()),
        );

        let result = use_case.execute(&registry, &request).await?;

        output::success(&format!(
            "project created at {}",
            result.project_dir.display()
        ));
        if let Some(install_error) = result.install_error {
            output::warn(&install_error);
            output::warn("run the install manually inside the project directory");
        }

        Ok(())
    }

    /// `list [name]`: resolve a template, fetch its tags, print one per line.
    async fn handle_list_command(&self, name: Option<&str>) -> ProgenResult<()> {
        let registry = TemplateRegistry::builtin();

        let key = match name {
            Some(name) => registry.resolve(name)?.key.clone(),
            None => prompts::select_template(&registry.keys())?,
        };
        let descriptor = registry.resolve(&key)?;

        let versions = ListVersionsUseCase::new(Box::new(GithubTagClient::new()))
            .execute(descriptor)
            .await?;

        // Tags go to stdout exactly as fetched, one per line, nothing else
        for version in &versions {
            println!("{}", version);
        }

        Ok(())
    }
}

/// Whether this failure can have left a partial project directory behind.
///
/// There is no rollback by design; the user is told instead.
fn leaves_partial_directory(error: &ProgenError) -> bool {
    matches!(
        error,
        ProgenError::DownloadFailed { .. }
            | ProgenError::ManifestRead { .. }
            | ProgenError::ManifestParse { .. }
            | ProgenError::ManifestWrite { .. }
    )
}
