use crate::common::error::ProgenError;
use crate::common::result::ProgenResult;
use crate::domain::entities::template::TemplateDescriptor;
use crate::domain::value_objects::VersionTag;
use async_trait::async_trait;
use serde::Deserialize;

/// Source of published version tags for a template repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagSource: Send + Sync {
    /// Fetch the ordered tag list for the given repository.
    ///
    /// The returned order is exactly what the hosting API produced; tags are
    /// not re-sorted and duplicates are not filtered. An empty list is a
    /// valid result. Any transport failure or non-success status aborts with
    /// [`ProgenError::NetworkError`]; no fallback list is substituted.
    async fn fetch_tags(&self, descriptor: &TemplateDescriptor) -> ProgenResult<Vec<VersionTag>>;
}

/// One entry of the GitHub tag-listing response.
///
/// The API returns more fields (commit, tarball URLs); only `name` matters.
#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

/// Tag source backed by the GitHub REST API.
pub struct GithubTagClient {
    http_client: reqwest::Client,
}

impl GithubTagClient {
    /// Create a client.
    ///
    /// GitHub rejects requests without a `User-Agent`, so one is always set.
    /// No request timeout is configured: the tool is interactive and the
    /// operator can interrupt a hung call.
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("progen/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("default HTTP client configuration is valid");
        Self { http_client }
    }
}

impl Default for GithubTagClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagSource for GithubTagClient {
    async fn fetch_tags(&self, descriptor: &TemplateDescriptor) -> ProgenResult<Vec<VersionTag>> {
        let url = descriptor.tags_url()?;
        tracing::debug!(url = %url, "fetching tag list");

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                ProgenError::network_error_with_source(
                    "tag request failed",
                    Some(url.to_string()),
                    e,
                )
            })?;

        if !response.status().is_success() {
            return Err(ProgenError::network_error(
                format!("tag request returned status {}", response.status()),
                Some(url.to_string()),
            ));
        }

        let entries: Vec<TagEntry> = response.json().await.map_err(|e| {
            ProgenError::network_error_with_source(
                "tag response was not valid JSON",
                Some(url.to_string()),
                e,
            )
        })?;

        tracing::debug!(count = entries.len(), "tag list fetched");
        Ok(entries
            .into_iter()
            .map(|entry| VersionTag::new(entry.name))
            .collect())
    }
}
