use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "price-scout")]
#[command(about = "Search configured retail sites for a keyword and compare prices")]
pub struct CliConfig {
    /// Keyword to search for. May be empty; sites decide what that returns.
    pub keyword: String,

    #[arg(long, default_value = "sites.toml", help = "Path to the sites TOML file")]
    pub sites: String,

    #[arg(long, help = "Limit the number of listings printed")]
    pub limit: Option<usize>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
