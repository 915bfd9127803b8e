use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One extracted product record, ready for display or persistence.
///
/// A listing only materializes when name, price, link and image were all
/// resolved from the source markup; partial records are skipped upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    /// Non-negative amount, two fractional digits.
    pub price: Decimal,
    /// Absolute URL to the product page.
    pub link: String,
    /// Thumbnail URL as scraped (absolute or source-relative).
    pub image: String,
    /// Name of the site that produced this listing.
    pub source: String,
}

/// How a site renders its price text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceFormat {
    /// A currency symbol prefixes the amount, e.g. "$1,234.56".
    SymbolPrefixed,
    /// Bare amount, possibly with thousands separators, e.g. "1,234.56".
    Plain,
}

/// Merged outcome of one keyword search across all configured sites.
///
/// `listings` is sorted by ascending price; equal prices keep
/// site-then-document order. An empty list with `sites_failed` equal to the
/// site count means every source was unreachable.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub listings: Vec<Listing>,
    pub sites_failed: usize,
    pub records_skipped: usize,
}
