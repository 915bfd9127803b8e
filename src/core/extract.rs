use crate::config::sites::SiteConfig;
use crate::core::price::{normalize_price, PriceParseError};
use crate::domain::model::{Listing, PriceFormat};
use crate::utils::error::{Result, ScoutError};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

/// Why a single product container was dropped. Skips are logged and counted,
/// never propagated: one malformed listing must not abort its siblings.
#[derive(Error, Debug)]
pub enum SkipReason {
    #[error("no element matched the {0} selector")]
    MissingField(&'static str),

    #[error("the {0} element had no text")]
    EmptyField(&'static str),

    #[error("the {field} element has no '{attribute}' attribute")]
    MissingAttribute {
        field: &'static str,
        attribute: &'static str,
    },

    #[error("{0}")]
    Price(#[from] PriceParseError),

    #[error("product link did not resolve: {0}")]
    BadLink(#[from] url::ParseError),
}

/// Outcome of extracting one fetched page.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Listings in document order of their containers.
    pub listings: Vec<Listing>,
    /// Containers dropped because a required field failed to resolve.
    pub skipped: usize,
}

/// Pulls listings out of one site's search-results markup, driven entirely
/// by the site's configured selectors. Pure over its inputs: identical
/// markup yields identical listings, order for order.
pub struct SiteExtractor {
    source: String,
    base_url: Url,
    price_format: PriceFormat,
    container: Selector,
    name: Selector,
    price: Selector,
    link: Selector,
    image: Selector,
}

fn compile_selector(field: &str, selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScoutError::InvalidSelector {
        field: field.to_string(),
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

impl SiteExtractor {
    /// Compiles a site's selectors once up front. A selector or base URL
    /// that does not parse is a configuration defect and raises here, before
    /// any markup is touched.
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| ScoutError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            source: config.name.clone(),
            base_url,
            price_format: config.price_format,
            container: compile_selector("selectors.container", &config.selectors.container)?,
            name: compile_selector("selectors.name", &config.selectors.name)?,
            price: compile_selector("selectors.price", &config.selectors.price)?,
            link: compile_selector("selectors.link", &config.selectors.link)?,
            image: compile_selector("selectors.image", &config.selectors.image)?,
        })
    }

    /// Walks every container in document order, keeping the listings whose
    /// required fields all resolved and counting the rest as skipped.
    pub fn extract(&self, html: &str) -> Extraction {
        let document = Html::parse_document(html);
        let mut extraction = Extraction::default();

        for container in document.select(&self.container) {
            match self.listing_from(container) {
                Ok(listing) => extraction.listings.push(listing),
                Err(reason) => {
                    extraction.skipped += 1;
                    tracing::debug!(source = %self.source, %reason, "skipping listing");
                }
            }
        }

        extraction
    }

    fn listing_from(&self, container: ElementRef<'_>) -> std::result::Result<Listing, SkipReason> {
        let name = element_text(container, &self.name, "name")?;

        let raw_price = element_text(container, &self.price, "price")?;
        let price = normalize_price(&raw_price, self.price_format)?;

        let href = element_attr(container, &self.link, "link", "href")?;
        // Joining against the base origin resolves relative hrefs and
        // passes absolute ones through unchanged.
        let link = self.base_url.join(&href)?.to_string();

        let image = element_attr(container, &self.image, "image", "src")?;

        Ok(Listing {
            name,
            price,
            link,
            image,
            source: self.source.clone(),
        })
    }
}

fn element_text(
    container: ElementRef<'_>,
    selector: &Selector,
    field: &'static str,
) -> std::result::Result<String, SkipReason> {
    let element = container
        .select(selector)
        .next()
        .ok_or(SkipReason::MissingField(field))?;
    let text = element.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        return Err(SkipReason::EmptyField(field));
    }
    Ok(text)
}

fn element_attr(
    container: ElementRef<'_>,
    selector: &Selector,
    field: &'static str,
    attribute: &'static str,
) -> std::result::Result<String, SkipReason> {
    let element = container
        .select(selector)
        .next()
        .ok_or(SkipReason::MissingField(field))?;
    element
        .value()
        .attr(attribute)
        .map(str::to_string)
        .ok_or(SkipReason::MissingAttribute { field, attribute })
}
