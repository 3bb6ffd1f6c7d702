use crate::crawlers::crawler::{FetchResponse, Fetcher};
use crate::error::CrawlError;
use std::path::PathBuf;

/// Serves a saved listing page from disk in place of the network.
///
/// The requested URL is ignored and the status is always 200.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Fetcher for FileFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, CrawlError> {
        ::log::debug!("Reading {} from {}", url, self.path.display());
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(FetchResponse::new(200, body))
    }
}
