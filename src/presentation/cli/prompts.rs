//! Interactive question sequence.
//!
//! Prompts block until the user answers; there are no timeouts. A closed
//! input stream (end-of-input, detached terminal) resolves to
//! [`ProgenError::PromptCancelled`] and the caller aborts without scaffolding.

use crate::common::error::ProgenError;
use crate::common::result::ProgenResult;
use crate::domain::value_objects::{ProjectName, VersionTag};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// Answers collected before the tag list is known.
#[derive(Debug, Clone)]
pub struct InitialAnswers {
    /// Validated project name
    pub project_name: ProjectName,
    /// Free-form project description (may be empty)
    pub description: String,
    /// Free-form author name (may be empty)
    pub author: String,
    /// Selected template key
    pub template_key: String,
}

/// Ask for project name (unless pre-seeded), description, author, and
/// template choice.
///
/// A name supplied as a command-line argument skips that question but is
/// validated the same way as a prompted one.
pub fn collect_initial_answers(
    provided_name: Option<&str>,
    template_keys: &[String],
) -> ProgenResult<InitialAnswers> {
    let theme = ColorfulTheme::default();

    let project_name = match provided_name {
        Some(name) => ProjectName::new(name).map_err(|e| {
            ProgenError::validation_error("project name", e.to_string(), Some(name.to_string()))
        })?,
        None => {
            let answer: String = Input::with_theme(&theme)
                .with_prompt("Project name")
                .validate_with(|input: &String| {
                    ProjectName::new(input).map(|_| ()).map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(ProgenError::from)?;
            ProjectName::new(&answer)
                .map_err(|e| ProgenError::validation_error("project name", e.to_string(), None))?
        }
    };

    let description: String = Input::with_theme(&theme)
        .with_prompt("Project description")
        .allow_empty(true)
        .interact_text()
        .map_err(ProgenError::from)?;

    let author: String = Input::with_theme(&theme)
        .with_prompt("Author")
        .allow_empty(true)
        .interact_text()
        .map_err(ProgenError::from)?;

    let template_key = select_template(template_keys)?;

    Ok(InitialAnswers {
        project_name,
        description,
        author,
        template_key,
    })
}

/// Single-choice prompt over the registry's template keys.
pub fn select_template(template_keys: &[String]) -> ProgenResult<String> {
    if template_keys.is_empty() {
        return Err(ProgenError::internal_error("template registry is empty"));
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a project template")
        .items(template_keys)
        .default(0)
        .interact()
        .map_err(ProgenError::from)?;

    Ok(template_keys[selection].clone())
}

/// Single-choice prompt over the fetched tags.
///
/// Must only be called once tags are known. A template with zero published
/// versions produces a clear error instead of an empty menu.
pub fn collect_version(tags: &[VersionTag]) -> ProgenResult<VersionTag> {
    if tags.is_empty() {
        return Err(ProgenError::validation_error(
            "version",
            "this template has no published versions",
            None,
        ));
    }

    let labels: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a template version")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(ProgenError::from)?;

    Ok(tags[selection].clone())
}
