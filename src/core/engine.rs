use crate::config::sites::SiteConfig;
use crate::core::extract::SiteExtractor;
use crate::domain::model::SearchResults;
use crate::domain::ports::PageFetcher;
use crate::utils::error::Result;

struct ConfiguredSite {
    config: SiteConfig,
    extractor: SiteExtractor,
}

/// Runs one keyword search across all configured sites and merges the
/// results. This is the error-containment boundary: fetch and extraction
/// failures are absorbed here, and only configuration defects ever raise
/// (at construction, before any search runs).
pub struct SearchEngine<F: PageFetcher> {
    fetcher: F,
    sites: Vec<ConfiguredSite>,
}

impl<F: PageFetcher> SearchEngine<F> {
    pub fn new(fetcher: F, configs: Vec<SiteConfig>) -> Result<Self> {
        let sites = configs
            .into_iter()
            .map(|config| {
                let extractor = SiteExtractor::new(&config)?;
                Ok(ConfiguredSite { config, extractor })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { fetcher, sites })
    }

    /// Fetches and extracts each site in declared order, then stable-sorts
    /// the merged listings by ascending price, so equal prices keep
    /// site-then-document order. Never errors: an unreachable site simply
    /// contributes nothing, and all sites failing yields an empty result.
    pub async fn search(&self, keyword: &str) -> SearchResults {
        let mut results = SearchResults::default();

        for site in &self.sites {
            let html = match self.fetcher.fetch(&site.config, keyword).await {
                Ok(html) => html,
                Err(e) => {
                    results.sites_failed += 1;
                    tracing::warn!(site = %site.config.name, error = %e, "site fetch failed, skipping");
                    continue;
                }
            };

            let extraction = site.extractor.extract(&html);
            tracing::info!(
                site = %site.config.name,
                listings = extraction.listings.len(),
                skipped = extraction.skipped,
                "extracted listings"
            );
            results.records_skipped += extraction.skipped;
            results.listings.extend(extraction.listings);
        }

        results.listings.sort_by(|a, b| a.price.cmp(&b.price));
        results
    }
}
