use crate::common::progress::StepProgress;
use crate::common::result::ProgenResult;
use crate::domain::entities::template::TemplateDescriptor;
use crate::domain::value_objects::VersionTag;
use crate::infrastructure::github::TagSource;

/// Retrieves the published versions of a template.
///
/// Used by both `list` (to print them) and `init` (to drive the version
/// prompt). A spinner runs for the duration of the network call and resolves
/// to a success or failure mark.
pub struct ListVersionsUseCase {
    tag_source: Box<dyn TagSource>,
}

impl ListVersionsUseCase {
    /// Create the use case with a tag source.
    pub fn new(tag_source: Box<dyn TagSource>) -> Self {
        Self { tag_source }
    }

    /// Fetch the ordered tag list for `descriptor`.
    ///
    /// On failure the current flow aborts; there is no fallback version
    /// list. An empty result is valid and is handed to the caller as-is.
    pub async fn execute(&self, descriptor: &TemplateDescriptor) -> ProgenResult<Vec<VersionTag>> {
        let mut progress = StepProgress::start_new(format!(
            "fetching tags for {}/{}...",
            descriptor.owner, descriptor.repo
        ));

        match self.tag_source.fetch_tags(descriptor).await {
            Ok(tags) => {
                progress.succeed(format!("found {} version(s)", tags.len()));
                Ok(tags)
            }
            Err(e) => {
                progress.fail("failed to fetch tags");
                Err(e)
            }
        }
    }
}
