// ABOUTME: Markup parsing and structural queries over search-results pages.
// ABOUTME: Wraps scraper's permissive HTML tree with document-wide and fragment-scoped selection.

//! Markup parsing and selection.
//!
//! Parsing never fails: malformed input produces a best-effort tree.
//! Queries never fail either: an invalid selector or a selector with no
//! match yields an empty Vec.

pub mod compiled;

use std::io::{self, Read};

use scraper::{ElementRef, Html};

use crate::markup::compiled::get_or_compile;
use crate::resource::decode_detected;

/// A parsed markup document.
pub struct Markup {
    html: Html,
}

impl Markup {
    /// Parses raw text into a document tree.
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// Reads a page from a stream, dropping blank lines before parsing.
    ///
    /// The bytes are decoded with a detected charset, so pages that are not
    /// UTF-8 still parse. Only a failing read is an error.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = decode_detected(&bytes);

        let mut data = String::with_capacity(text.len());
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            data.push_str(line);
            data.push('\n');
        }
        Ok(Self::parse(&data))
    }

    /// Selects every element in the document matching `css`, in document order.
    pub fn select(&self, css: &str) -> Vec<ElementRef<'_>> {
        match get_or_compile(css) {
            Some(selector) => self.html.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    /// Returns the root `<html>` element.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

impl std::fmt::Debug for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Markup")
            .field("root", &self.root().value().name())
            .finish()
    }
}

/// Selects elements matching `css` strictly inside `fragment`.
///
/// The fragment element itself is never returned and nothing outside its
/// subtree can match, so sibling fragments never leak into each other.
pub fn select_in<'a>(fragment: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match get_or_compile(css) {
        Some(selector) => fragment.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// Whitespace-normalized text of all elements, joined by single spaces.
pub fn text_of(elements: &[ElementRef<'_>]) -> String {
    elements
        .iter()
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapses runs of whitespace into single spaces and trims.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
