use clap::Parser;
use price_scout::utils::logger;
use price_scout::{CliConfig, HttpFetcher, SearchEngine, SitesConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting price-scout");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let sites = match SitesConfig::from_path(&config.sites) {
        Ok(sites) => sites,
        Err(e) => {
            tracing::error!("Failed to load sites file '{}': {}", config.sites, e);
            eprintln!("Failed to load sites file '{}': {}", config.sites, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Loaded {} site(s) from {}", sites.sites.len(), config.sites);

    let fetcher = HttpFetcher::new();
    let engine = SearchEngine::new(fetcher, sites.sites)?;

    let results = engine.search(&config.keyword).await;

    if results.sites_failed > 0 {
        tracing::warn!("{} site(s) were unreachable", results.sites_failed);
    }
    if results.records_skipped > 0 {
        tracing::info!(
            "{} listing(s) skipped due to malformed markup",
            results.records_skipped
        );
    }

    if results.listings.is_empty() {
        println!("No results for '{}'", config.keyword);
        return Ok(());
    }

    let shown = config.limit.unwrap_or(results.listings.len());
    for listing in results.listings.iter().take(shown) {
        println!(
            "{:>10}  {}  [{}]\n            {}",
            format!("${}", listing.price),
            listing.name,
            listing.source,
            listing.link
        );
    }
    println!(
        "\n{} result(s) for '{}'",
        results.listings.len(),
        config.keyword
    );

    Ok(())
}
