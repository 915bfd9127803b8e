use crate::config::sites::SiteConfig;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Retrieves the raw markup of a site's search-results page for a keyword.
///
/// The production implementation wraps an HTTP client owned by the caller;
/// tests substitute canned markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, site: &SiteConfig, keyword: &str) -> Result<String>;
}
