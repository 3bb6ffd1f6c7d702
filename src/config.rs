use crate::error::CrawlError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration for the listing crawler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// CSS selector for the highlighted rows holding price and depreciation
    #[serde(default = "default_summary_row_selector")]
    pub summary_row_selector: String,

    /// CSS selector for the cells holding the remaining car details
    #[serde(default = "default_detail_cell_selector")]
    pub detail_cell_selector: String,

    /// Request timeout in seconds (the HTTP client default when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            summary_row_selector: default_summary_row_selector(),
            detail_cell_selector: default_detail_cell_selector(),
            timeout_secs: None,
        }
    }
}

/// Rows whose class attribute is exactly `row_bg`
fn default_summary_row_selector() -> String {
    r#"tr[class="row_bg"]"#.to_string()
}

/// Cells directly under a row whose class attribute is exactly `even_row`
fn default_detail_cell_selector() -> String {
    r#"tr > td[class="even_row"]"#.to_string()
}

impl CrawlerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CrawlError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CrawlError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
