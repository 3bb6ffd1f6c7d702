use clap::Parser;
use sgcarmart_crawler::DEMO_LISTING_URL;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sgcarmart-crawler")]
#[command(about = "Extracts car details from a single sgcarmart used-car listing")]
#[command(version)]
pub struct Args {
    /// Listing URL to crawl
    #[arg(default_value = DEMO_LISTING_URL)]
    pub url: String,

    /// JSON configuration file (selectors, timeout)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (overrides the configuration)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Extract from a saved HTML page instead of fetching the URL
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}
