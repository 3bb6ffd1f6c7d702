use crate::parsers::text;
use scraper::{Html, Selector};

#[cfg(test)]
mod tests {
    use super::*;

    fn select_tokens(html: &str, selector: &str) -> Vec<String> {
        let doc = Html::parse_document(html);
        let selector = Selector::parse(selector).unwrap();
        text::flatten_elements(doc.select(&selector))
    }

    #[test]
    fn test_tokenize_splits_on_any_whitespace() {
        assert_eq!(
            text::tokenize("  $9,370 \t/yr\n\n (10y 2mo) "),
            vec!["$9,370", "/yr", "(10y", "2mo)"]
        );
        assert!(text::tokenize("").is_empty());
        assert!(text::tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn test_flatten_preserves_element_then_token_order() {
        let html = "<html><body>\
            <p class=\"x\">one two</p>\
            <p>skipped</p>\
            <p class=\"x\">three</p>\
            <p class=\"x\">four five six</p>\
            </body></html>";
        assert_eq!(
            select_tokens(html, "p.x"),
            vec!["one", "two", "three", "four", "five", "six"]
        );
    }

    #[test]
    fn test_flatten_uses_nested_text() {
        let html = "<html><body><div class=\"x\">\
            <strong>$14,532</strong> as of <em>today</em>\
            </div></body></html>";
        assert_eq!(
            select_tokens(html, "div.x"),
            vec!["$14,532", "as", "of", "today"]
        );
    }

    #[test]
    fn test_adjacent_text_nodes_are_not_separated() {
        // No whitespace between the cells, so their text runs together
        let html = "<html><body><table><tr class=\"r\"><td>Reg</td><td>Date</td></tr></table></body></html>";
        assert_eq!(select_tokens(html, "tr.r"), vec!["RegDate"]);
    }

    #[test]
    fn test_no_matches_yield_no_tokens() {
        let html = "<html><body><p>text</p></body></html>";
        assert!(select_tokens(html, "td.even_row").is_empty());
    }
}
