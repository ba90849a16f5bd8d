// ABOUTME: ResultSession orchestrates extraction over one parsed search-results page.
// ABOUTME: Products and the result count are computed lazily, cached, and reset by clear().

//! Search result sessions.
//!
//! A session owns the parsed page and two independent facets:
//! - products: `None` until the first scan, then the deduplicated registry
//!   (possibly empty, which still counts as scanned).
//! - count: `None` until first read, then the normalized count string.
//!
//! `clear()` returns both facets to `None` without re-parsing the page.

use std::io::{self, Read};

use crate::extractors::count::extract_count;
use crate::extractors::fields::{CardSelectors, FieldExtractor};
use crate::markup::Markup;
use crate::registry::ProductRegistry;

#[derive(Debug)]
pub struct ResultSession {
    markup: Markup,
    extractor: FieldExtractor,
    products: Option<ProductRegistry>,
    count: Option<String>,
}

impl ResultSession {
    pub fn new(markup: Markup) -> Self {
        Self::with_selectors(markup, CardSelectors::default())
    }

    /// Creates a session that locates cards and fields with custom selectors.
    pub fn with_selectors(markup: Markup, selectors: CardSelectors) -> Self {
        Self {
            markup,
            extractor: FieldExtractor::new(selectors),
            products: None,
            count: None,
        }
    }

    pub fn from_html(raw: &str) -> Self {
        Self::new(Markup::parse(raw))
    }

    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        Ok(Self::new(Markup::from_reader(reader)?))
    }

    /// Returns the deduplicated products, scanning the page on first use.
    pub fn products(&mut self) -> &ProductRegistry {
        if self.products.is_none() {
            self.products = Some(self.scan_products());
        }
        self.products.get_or_insert_with(ProductRegistry::new)
    }

    /// Renders every product as a listing block; empty when there are none.
    pub fn products_text(&mut self) -> String {
        self.products().to_string()
    }

    /// Returns the total result count announced by the page, or "0".
    pub fn count(&mut self) -> &str {
        if self.count.is_none() {
            let count = extract_count(&self.markup);
            tracing::debug!(count = %count, "extracted result count");
            self.count = Some(count);
        }
        self.count.get_or_insert_with(String::new)
    }

    /// Forgets both computed facets; the parsed page is kept.
    pub fn clear(&mut self) {
        self.products = None;
        self.count = None;
    }

    /// True once products have been scanned since construction or `clear()`.
    pub fn is_scanned(&self) -> bool {
        self.products.is_some()
    }

    /// True once the count has been extracted since construction or `clear()`.
    pub fn is_counted(&self) -> bool {
        self.count.is_some()
    }

    pub fn markup(&self) -> &Markup {
        &self.markup
    }

    fn scan_products(&self) -> ProductRegistry {
        let mut registry = ProductRegistry::new();
        let cards = self.markup.select(&self.extractor.selectors().card);
        let total = cards.len();
        for card in cards {
            let fields = self.extractor.extract(card);
            registry.add(&fields.title, &fields.price, &fields.vendor);
        }
        tracing::debug!(cards = total, products = registry.len(), "scanned product cards");
        registry
    }
}

/// Sessions are equal when they hold the same set of products.
///
/// Comparing reads the stored facets only; call `products()` on both sides
/// first to compare scanned results.
impl PartialEq for ResultSession {
    fn eq(&self, other: &Self) -> bool {
        self.products == other.products
    }
}
