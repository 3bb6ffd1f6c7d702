use crate::error::CrawlError;
use crate::parsers::ListingExtractor;
use crate::results::CrawlResult;
use std::future::Future;
use url::Url;

/// Status and body of a fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Source of listing pages
pub trait Fetcher {
    /// Retrieve the page at `url`. Errors mean no response was obtained at all.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchResponse, CrawlError>> + Send;
}

/// Checks that `url` is an absolute http(s) URL
pub fn validate_url(url: &str) -> Result<Url, CrawlError> {
    let parsed = Url::parse(url)?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CrawlError::UnsupportedScheme(other.to_string())),
    }
}

/// Fetches one listing and extracts its fields.
///
/// A status other than 200 gives an unsuccessful result without touching the
/// body. Transport and extraction failures are returned as errors.
pub async fn crawl_listing<F: Fetcher>(
    fetcher: &F,
    extractor: &ListingExtractor,
    url: &str,
) -> Result<CrawlResult, CrawlError> {
    validate_url(url)?;
    ::log::info!("Fetching listing: {}", url);

    let response = fetcher.fetch(url).await?;
    if response.status != 200 {
        ::log::warn!("Listing {} returned status {}", url, response.status);
        return Ok(CrawlResult::failed(url));
    }
    ::log::debug!("Fetched {} bytes from {}", response.body.len(), url);

    let payload = extractor.extract_html(&response.body)?;
    ::log::info!("Extracted {} fields from {}", payload.len(), url);
    Ok(CrawlResult::succeeded(url, payload))
}
