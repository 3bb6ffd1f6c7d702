pub mod crawler;
pub mod file;
pub mod web;

pub use crawler::{FetchResponse, Fetcher, crawl_listing, validate_url};
pub use file::FileFetcher;
pub use web::HttpFetcher;
