pub mod fields;
pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

pub use fields::{ExtractionError, FieldRule, Pick, Section, TokenPosition};
pub use html::{ListingExtractor, extract_listing};
