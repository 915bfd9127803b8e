pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::sites::{SelectorConfig, SiteConfig, SitesConfig};
pub use core::{engine::SearchEngine, fetch::HttpFetcher};
pub use domain::model::{Listing, PriceFormat, SearchResults};
pub use domain::ports::PageFetcher;
pub use utils::error::{Result, ScoutError};
