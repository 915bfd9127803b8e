#[cfg(feature = "cli")]
pub mod cli;
pub mod sites;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use sites::{SelectorConfig, SiteConfig, SitesConfig};
