//! Crawler for single sgcarmart.com used-car listings.
//!
//! A listing page is fetched once, its highlighted summary rows and detail
//! cells are flattened into token sequences, and fields are read from fixed
//! token positions into a [`CarInfoPayload`].

pub mod config;
pub mod crawlers;
pub mod error;
pub mod parsers;
pub mod results;

// Re-export commonly used types for convenience
pub use config::CrawlerConfig;
pub use error::CrawlError;
pub use parsers::{ExtractionError, ListingExtractor, extract_listing};
pub use results::{CarField, CarInfoPayload, CrawlResult};

use crawlers::{FileFetcher, HttpFetcher};
use std::path::{Path, PathBuf};

/// Listing used when no URL is given on the command line
pub const DEMO_LISTING_URL: &str = "https://www.sgcarmart.com/used_cars/info.php?ID=1020939&DL=3283";

/// Where listing pages come from
#[derive(Debug, Clone)]
pub enum PageSource {
    /// Fetch over HTTP
    Web,
    /// Read a saved page from disk
    File(PathBuf),
}

/// Builder for crawling listings
pub struct Listings {
    source: PageSource,
    config: CrawlerConfig,
}

impl Default for Listings {
    fn default() -> Self {
        Self::new()
    }
}

impl Listings {
    /// Crawl over HTTP with the default configuration
    pub fn new() -> Self {
        Self {
            source: PageSource::Web,
            config: CrawlerConfig::default(),
        }
    }

    /// Set where pages are read from
    pub fn with_source(mut self, source: PageSource) -> Self {
        self.source = source;
        self
    }

    /// Read the page from a saved file instead of the network
    pub fn with_html_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(PageSource::File(path.as_ref().to_path_buf()))
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: CrawlerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, CrawlError> {
        let config = CrawlerConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self, CrawlError> {
        let config = CrawlerConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = Some(timeout_secs);
        self
    }

    pub fn config(&self) -> &CrawlerConfig {
        &self.config
    }

    /// Fetch `url` once and extract its fields
    pub async fn crawl(&self, url: &str) -> Result<CrawlResult, CrawlError> {
        let extractor = ListingExtractor::from_config(&self.config)?;
        match &self.source {
            PageSource::Web => {
                let fetcher = HttpFetcher::from_timeout(self.config.timeout())?;
                crawlers::crawl_listing(&fetcher, &extractor, url).await
            }
            PageSource::File(path) => {
                let fetcher = FileFetcher::new(path.clone());
                crawlers::crawl_listing(&fetcher, &extractor, url).await
            }
        }
    }
}

/// Fetch a listing over HTTP with default settings and extract its fields
pub async fn crawl(url: &str) -> Result<CrawlResult, CrawlError> {
    Listings::new().crawl(url).await
}
