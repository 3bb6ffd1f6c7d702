//! Positional field rules.
//!
//! Each listing field is read from a flattened token sequence by a fixed
//! position. The rules for both page sections live in the tables below and
//! are applied by [`extract_fields`].

use crate::results::{CarField, CarInfoPayload};
use std::fmt;
use thiserror::Error;

/// Part of the listing page a token sequence was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Highlighted `row_bg` rows: price, depreciation, registration date
    Summary,
    /// Plain `even_row` cells: everything else
    Details,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Summary => f.write_str("summary rows"),
            Section::Details => f.write_str("detail cells"),
        }
    }
}

/// Token position a rule could not satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPosition {
    Index(usize),
    Last,
}

impl fmt::Display for TokenPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenPosition::Index(index) => write!(f, "token index {}", index),
            TokenPosition::Last => f.write_str("a last token"),
        }
    }
}

/// A field's token is missing from the page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} needs {wanted} but the {section} produced only {available} tokens")]
pub struct ExtractionError {
    pub section: Section,
    pub field: CarField,
    pub wanted: TokenPosition,
    pub available: usize,
}

/// How a field value is picked out of the token sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// The token at a fixed index
    Index(usize),
    /// The first `chars` characters of the token at `index`
    Prefix { index: usize, chars: usize },
    /// Tokens `start..end` joined by single spaces.
    ///
    /// The range is clamped to the sequence like a slice, so a short
    /// sequence yields fewer tokens or an empty string.
    Join { start: usize, end: usize },
    /// The final token of the sequence
    Last,
}

impl Pick {
    pub fn apply(&self, tokens: &[String]) -> Result<String, TokenPosition> {
        match *self {
            Pick::Index(index) => tokens
                .get(index)
                .cloned()
                .ok_or(TokenPosition::Index(index)),
            Pick::Prefix { index, chars } => tokens
                .get(index)
                .map(|token| token.chars().take(chars).collect())
                .ok_or(TokenPosition::Index(index)),
            Pick::Join { start, end } => {
                let end = end.min(tokens.len());
                let start = start.min(end);
                Ok(tokens[start..end].join(" "))
            }
            Pick::Last => tokens.last().cloned().ok_or(TokenPosition::Last),
        }
    }
}

/// A field paired with the position it is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: CarField,
    pub pick: Pick,
}

impl FieldRule {
    pub const fn new(field: CarField, pick: Pick) -> Self {
        Self { field, pick }
    }
}

pub const SUMMARY_FIELDS: &[FieldRule] = &[
    FieldRule::new(CarField::Price, Pick::Index(1)),
    FieldRule::new(CarField::Depreciation, Pick::Index(3)),
    // Registration date token carries a glued-on COE remainder, e.g. "18-Dec-2015(5yrs"
    FieldRule::new(
        CarField::CoeRegistrationDate,
        Pick::Prefix {
            index: 7,
            chars: 11,
        },
    ),
];

pub const DETAIL_FIELDS: &[FieldRule] = &[
    FieldRule::new(CarField::Mileage, Pick::Join { start: 1, end: 3 }),
    FieldRule::new(CarField::RoadTax, Pick::Index(7)),
    FieldRule::new(CarField::DeregistrationValue, Pick::Index(11)),
    FieldRule::new(CarField::Coe, Pick::Index(17)),
    FieldRule::new(CarField::EngineCap, Pick::Index(20)),
    FieldRule::new(CarField::CurbWeight, Pick::Join { start: 24, end: 26 }),
    FieldRule::new(CarField::ManufacturedYear, Pick::Index(27)),
    FieldRule::new(CarField::Transmission, Pick::Index(29)),
    FieldRule::new(CarField::OpenMarketValue, Pick::Index(31)),
    FieldRule::new(CarField::AdditionalRegistrationFee, Pick::Index(33)),
    FieldRule::new(CarField::Power, Pick::Join { start: 35, end: 39 }),
    // Whatever ends the sequence, not a fixed index
    FieldRule::new(CarField::NumberOfOwners, Pick::Last),
];

/// Applies rules in order and fails on the first one the tokens cannot satisfy
pub fn extract_fields(
    section: Section,
    tokens: &[String],
    rules: &[FieldRule],
) -> Result<CarInfoPayload, ExtractionError> {
    let mut payload = CarInfoPayload::new();
    for rule in rules {
        let value = rule.pick.apply(tokens).map_err(|wanted| ExtractionError {
            section,
            field: rule.field,
            wanted,
            available: tokens.len(),
        })?;
        ::log::trace!("{} = {:?}", rule.field, value);
        payload.insert(rule.field, value);
    }
    Ok(payload)
}
