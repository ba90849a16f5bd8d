// ABOUTME: Result-count extraction from the loosely formatted count-display node.
// ABOUTME: Takes the last digit run (with an optional trailing plus) and defaults to "0".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::markup::{text_of, Markup};

/// Selector of the element announcing the number of results.
pub const COUNT_SELECTOR: &str = "div#nmbProdItems";

/// Count reported when the page carries no readable count.
pub const ZERO_COUNT: &str = "0";

// Last ASCII digit run, optional "+", then only non-digits to the end.
static COUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)\s*(\+?)[^0-9]*$").expect("count pattern is valid")
});

/// Finds the count-display node and derives the normalized count string.
pub fn extract_count(doc: &Markup) -> String {
    let nodes = doc.select(COUNT_SELECTOR);
    let text = nodes.first().map(|node| text_of(&[*node])).unwrap_or_default();
    parse_count(&text)
}

/// Derives the count string from display text such as "Showing 1-25 of 128+".
pub fn parse_count(text: &str) -> String {
    match COUNT_PATTERN.captures(text) {
        Some(caps) => format!("{}{}", &caps[1], &caps[2]),
        None => ZERO_COUNT.to_string(),
    }
}
