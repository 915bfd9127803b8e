use crate::config::sites::SiteConfig;
use crate::domain::ports::PageFetcher;
use crate::utils::error::{Result, ScoutError};
use async_trait::async_trait;
use reqwest::Client;
use url::form_urlencoded;

const USER_AGENT: &str = concat!("price-scout/", env!("CARGO_PKG_VERSION"));

/// Builds the search URL for a site by appending the urlencoded keyword to
/// the configured prefix.
pub fn search_url(site: &SiteConfig, keyword: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(keyword.as_bytes()).collect();
    format!("{}{}", site.search_url, encoded)
}

/// [`PageFetcher`] backed by reqwest. The caller constructs one and reuses
/// it across searches; the underlying client pools connections.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, site: &SiteConfig, keyword: &str) -> Result<String> {
        let url = search_url(site, keyword);
        tracing::debug!(site = %site.name, %url, "fetching search page");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoutError::BadStatus {
                site: site.name.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(ScoutError::EmptyBody {
                site: site.name.clone(),
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sites::SelectorConfig;
    use crate::domain::model::PriceFormat;

    fn test_site(search_prefix: &str) -> SiteConfig {
        SiteConfig {
            name: "example".to_string(),
            base_url: "https://example.com".to_string(),
            search_url: search_prefix.to_string(),
            price_format: PriceFormat::SymbolPrefixed,
            selectors: SelectorConfig {
                container: "div.product".to_string(),
                name: "span.title".to_string(),
                price: "span.price".to_string(),
                link: "a".to_string(),
                image: "img".to_string(),
            },
        }
    }

    #[test]
    fn test_search_url_appends_keyword() {
        let site = test_site("https://example.com/search?q=");
        assert_eq!(
            search_url(&site, "laptop"),
            "https://example.com/search?q=laptop"
        );
    }

    #[test]
    fn test_search_url_encodes_keyword() {
        let site = test_site("https://example.com/search?q=");
        assert_eq!(
            search_url(&site, "red shoes & hats"),
            "https://example.com/search?q=red+shoes+%26+hats"
        );
    }

    #[test]
    fn test_search_url_forwards_empty_keyword() {
        let site = test_site("https://example.com/search?q=");
        assert_eq!(search_url(&site, ""), "https://example.com/search?q=");
    }
}
