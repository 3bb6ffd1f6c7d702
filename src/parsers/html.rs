use crate::config::CrawlerConfig;
use crate::error::CrawlError;
use crate::parsers::fields::{self, DETAIL_FIELDS, ExtractionError, SUMMARY_FIELDS, Section};
use crate::parsers::text;
use crate::results::CarInfoPayload;
use scraper::{Html, Selector};

/// Extracts listing fields from a parsed sgcarmart page
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    summary_rows: Selector,
    detail_cells: Selector,
}

impl Default for ListingExtractor {
    fn default() -> Self {
        Self::from_config(&CrawlerConfig::default()).expect("Default selectors should be valid")
    }
}

impl ListingExtractor {
    /// Compile the selectors named in the configuration
    pub fn from_config(config: &CrawlerConfig) -> Result<Self, CrawlError> {
        Ok(Self {
            summary_rows: compile_selector(&config.summary_row_selector)?,
            detail_cells: compile_selector(&config.detail_cell_selector)?,
        })
    }

    /// Flattened tokens of the highlighted summary rows
    pub fn summary_tokens(&self, doc: &Html) -> Vec<String> {
        text::flatten_elements(doc.select(&self.summary_rows))
    }

    /// Flattened tokens of the detail cells
    pub fn detail_tokens(&self, doc: &Html) -> Vec<String> {
        text::flatten_elements(doc.select(&self.detail_cells))
    }

    /// Price, depreciation and COE registration date
    pub fn extract_summary(&self, doc: &Html) -> Result<CarInfoPayload, ExtractionError> {
        let tokens = self.summary_tokens(doc);
        ::log::debug!("Summary rows produced {} tokens", tokens.len());
        fields::extract_fields(Section::Summary, &tokens, SUMMARY_FIELDS)
    }

    /// Mileage, road tax, COE, engine and ownership details
    pub fn extract_details(&self, doc: &Html) -> Result<CarInfoPayload, ExtractionError> {
        let tokens = self.detail_tokens(doc);
        ::log::debug!("Detail cells produced {} tokens", tokens.len());
        fields::extract_fields(Section::Details, &tokens, DETAIL_FIELDS)
    }

    /// Runs both sections against one document and merges the results
    pub fn extract(&self, doc: &Html) -> Result<CarInfoPayload, ExtractionError> {
        let mut payload = self.extract_summary(doc)?;
        payload.merge(self.extract_details(doc)?);
        Ok(payload)
    }

    /// Parses raw HTML and extracts every field
    pub fn extract_html(&self, html: &str) -> Result<CarInfoPayload, ExtractionError> {
        let doc = Html::parse_document(html);
        self.extract(&doc)
    }
}

/// Extracts every field from a raw listing page using the default selectors
pub fn extract_listing(html: &str) -> Result<CarInfoPayload, ExtractionError> {
    ListingExtractor::default().extract_html(html)
}

fn compile_selector(selector: &str) -> Result<Selector, CrawlError> {
    Selector::parse(selector).map_err(|e| CrawlError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
