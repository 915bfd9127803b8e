use crate::domain::model::PriceFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Declarative description of one external site: where to search and how to
/// pick listings out of its markup. Adding a site means adding one of these
/// to the sites file, not adding a code path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    /// Origin used to resolve site-relative product links.
    pub base_url: String,
    /// Search URL prefix; the urlencoded keyword is appended verbatim.
    pub search_url: String,
    pub price_format: PriceFormat,
    pub selectors: SelectorConfig,
}

/// CSS selectors for one site: a container per product block, and the
/// sub-selectors resolved relative to each container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub container: String,
    pub name: String,
    pub price: String,
    /// Must select an element carrying an `href` attribute.
    pub link: String,
    /// Must select an element carrying a `src` attribute.
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitesConfig {
    pub sites: Vec<SiteConfig>,
}

impl SitesConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SitesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for SitesConfig {
    fn validate(&self) -> Result<()> {
        for site in &self.sites {
            site.validate()?;
        }
        Ok(())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_url("base_url", &self.base_url)?;
        validate_url("search_url", &self.search_url)?;
        validate_non_empty_string("selectors.container", &self.selectors.container)?;
        validate_non_empty_string("selectors.name", &self.selectors.name)?;
        validate_non_empty_string("selectors.price", &self.selectors.price)?;
        validate_non_empty_string("selectors.link", &self.selectors.link)?;
        validate_non_empty_string("selectors.image", &self.selectors.image)?;
        Ok(())
    }
}
