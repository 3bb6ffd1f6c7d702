use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Fields extracted from a listing page, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarField {
    Price,
    Depreciation,
    CoeRegistrationDate,
    Mileage,
    RoadTax,
    DeregistrationValue,
    Coe,
    EngineCap,
    CurbWeight,
    ManufacturedYear,
    Transmission,
    OpenMarketValue,
    AdditionalRegistrationFee,
    Power,
    NumberOfOwners,
}

impl CarField {
    /// The snake_case key used in the JSON payload
    pub fn as_str(&self) -> &'static str {
        match self {
            CarField::Price => "price",
            CarField::Depreciation => "depreciation",
            CarField::CoeRegistrationDate => "coe_registration_date",
            CarField::Mileage => "mileage",
            CarField::RoadTax => "road_tax",
            CarField::DeregistrationValue => "deregistration_value",
            CarField::Coe => "coe",
            CarField::EngineCap => "engine_cap",
            CarField::CurbWeight => "curb_weight",
            CarField::ManufacturedYear => "manufactured_year",
            CarField::Transmission => "transmission",
            CarField::OpenMarketValue => "open_market_value",
            CarField::AdditionalRegistrationFee => "additional_registration_fee",
            CarField::Power => "power",
            CarField::NumberOfOwners => "number_of_owners",
        }
    }
}

impl fmt::Display for CarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw field values scraped from one listing.
///
/// Values are kept exactly as they appear on the page, currency symbols,
/// thousands separators and units included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarInfoPayload(BTreeMap<CarField, String>);

impl CarInfoPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: CarField, value: String) {
        self.0.insert(field, value);
    }

    /// Value of a field, if it was extracted
    pub fn get(&self, field: CarField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Move every field of `other` into this payload
    pub fn merge(&mut self, other: CarInfoPayload) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CarField, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

/// Outcome of crawling a single listing URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlResult {
    /// Whether the page was fetched with status 200 and extracted
    pub success: bool,

    /// URL that was requested
    pub url: String,

    /// Extracted fields (empty when `success` is false)
    pub payload: CarInfoPayload,
}

impl CrawlResult {
    /// A successful crawl carrying the extracted payload
    pub fn succeeded(url: &str, payload: CarInfoPayload) -> Self {
        Self {
            success: true,
            url: url.to_string(),
            payload,
        }
    }

    /// An unsuccessful crawl with an empty payload
    pub fn failed(url: &str) -> Self {
        Self {
            success: false,
            url: url.to_string(),
            payload: CarInfoPayload::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_result_serializes_empty_payload() {
        let result = CrawlResult::failed("https://example.com/listing");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "url": "https://example.com/listing",
                "payload": {}
            })
        );
    }

    #[test]
    fn test_payload_keys_are_snake_case() {
        let mut payload = CarInfoPayload::new();
        payload.insert(CarField::OpenMarketValue, "$11,333".to_string());
        payload.insert(CarField::CoeRegistrationDate, "18-Dec-2015".to_string());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["open_market_value"], "$11,333");
        assert_eq!(json["coe_registration_date"], "18-Dec-2015");

        // Keys round-trip back into the enum
        let back: CarInfoPayload = serde_json::from_value(json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_merge_keeps_both_sides() {
        let mut summary = CarInfoPayload::new();
        summary.insert(CarField::Price, "$19,800".to_string());

        let mut details = CarInfoPayload::new();
        details.insert(CarField::Coe, "$37,121".to_string());
        details.insert(CarField::Transmission, "Auto".to_string());

        summary.merge(details);
        assert_eq!(summary.len(), 3);
        assert_eq!(summary.get(CarField::Price), Some("$19,800"));
        assert_eq!(summary.get(CarField::Transmission), Some("Auto"));
        assert_eq!(summary.get(CarField::Power), None);
    }

    #[test]
    fn test_display_matches_serde_name() {
        let field = CarField::AdditionalRegistrationFee;
        let json = serde_json::to_value(field).unwrap();
        assert_eq!(json, serde_json::Value::String(field.to_string()));
    }
}
