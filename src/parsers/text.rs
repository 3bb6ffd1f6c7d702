use scraper::ElementRef;

/// Splits text into tokens on runs of whitespace, dropping empty tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Full text content of an element.
///
/// Descendant text nodes are concatenated with no separator, so adjacent
/// cells such as `<td>a</td><td>b</td>` read as `ab`.
pub fn text_content(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

/// Flattens matched elements into one token sequence.
///
/// Tokens keep document order of the elements, then left-to-right order
/// within each element.
pub fn flatten_elements<'a, I>(elements: I) -> Vec<String>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    elements
        .into_iter()
        .flat_map(|element| tokenize(&text_content(&element)))
        .collect()
}
