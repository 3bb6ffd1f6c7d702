mod tokenizer_tests;

pub(crate) const LISTING_PAGE: &str = include_str!("fixtures/listing_1020939.html");
pub(crate) const NOT_FOUND_PAGE: &str = include_str!("fixtures/not_found.html");
