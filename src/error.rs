use crate::parsers::fields::ExtractionError;
use thiserror::Error;

/// Errors that abort a crawl.
///
/// A non-200 status is not an error: it comes back as an unsuccessful
/// [`CrawlResult`](crate::CrawlResult) instead.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The request never produced a response (DNS, refused connection, timeout)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The listing URL could not be parsed
    #[error("invalid listing URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The listing URL parsed but is not fetchable over HTTP
    #[error("unsupported URL scheme `{0}`, expected http or https")]
    UnsupportedScheme(String),

    /// The page markup no longer has the tokens a field expects
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// A configured CSS selector did not parse
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
