// ABOUTME: Field extraction for product cards: title, price and vendor text.
// ABOUTME: Missing nodes degrade to empty text; an empty vendor falls back to the store itself.

//! Product-card field extraction.
//!
//! Key behaviors:
//! - Field selectors are evaluated only inside the card element.
//! - Multiple matches are joined with single spaces.
//! - A missing node is empty text, never an error.

use scraper::ElementRef;

use crate::markup::{select_in, text_of};

/// Vendor reported when a card names no marketplace seller.
pub const VENDOR_FALLBACK: &str = "Sold by Sears";

/// Selector strings describing the card layout of the results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSelectors {
    pub card: String,
    pub title: String,
    pub price: String,
    pub vendor: String,
}

impl Default for CardSelectors {
    fn default() -> Self {
        Self {
            card: "div.cardContainer".to_string(),
            title: "div.cardContainer > div.cardInner > div.cardProdTitle > h4 > a".to_string(),
            price: "div.cardContainer > div.cardInner > div.cardProdPricing_v2 > span.price_v2"
                .to_string(),
            vendor: "div.cardContainer > div.cardInner > div#mrkplc > p:not([class])".to_string(),
        }
    }
}

/// Raw field text pulled from one card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub title: String,
    pub price: String,
    pub vendor: String,
}

/// Extracts product fields from card fragments.
#[derive(Debug, Clone, Default)]
pub struct FieldExtractor {
    selectors: CardSelectors,
}

impl FieldExtractor {
    pub fn new(selectors: CardSelectors) -> Self {
        Self { selectors }
    }

    pub fn selectors(&self) -> &CardSelectors {
        &self.selectors
    }

    pub fn extract(&self, card: ElementRef<'_>) -> ExtractedFields {
        let title = text_of(&select_in(card, &self.selectors.title));
        let price = text_of(&select_in(card, &self.selectors.price));
        let mut vendor = text_of(&select_in(card, &self.selectors.vendor));
        if vendor.is_empty() {
            vendor = VENDOR_FALLBACK.to_string();
        }
        ExtractedFields {
            title,
            price,
            vendor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Markup;

    fn first_card(doc: &Markup) -> ElementRef<'_> {
        doc.select("div.cardContainer")[0]
    }

    #[test]
    fn test_extracts_all_fields() {
        let doc = Markup::parse(
            r#"<div class="cardContainer"><div class="cardInner">
                <div class="cardProdTitle"><h4><a href="/p/1">  Oster   Blender </a></h4></div>
                <div class="cardProdPricing_v2"><span class="price_v2">$29.99</span></div>
                <div id="mrkplc"><p class="label">Sold by</p><p>Kitchen Outlet</p></div>
            </div></div>"#,
        );
        let fields = FieldExtractor::default().extract(first_card(&doc));
        assert_eq!(
            fields,
            ExtractedFields {
                title: "Oster Blender".to_string(),
                price: "$29.99".to_string(),
                vendor: "Kitchen Outlet".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_vendor_uses_fallback() {
        let doc = Markup::parse(
            r#"<div class="cardContainer"><div class="cardInner">
                <div class="cardProdTitle"><h4><a>Toaster</a></h4></div>
                <div class="cardProdPricing_v2"><span class="price_v2">$15</span></div>
            </div></div>"#,
        );
        let fields = FieldExtractor::default().extract(first_card(&doc));
        assert_eq!(fields.vendor, VENDOR_FALLBACK);
    }

    #[test]
    fn test_blank_vendor_uses_fallback() {
        let doc = Markup::parse(
            r#"<div class="cardContainer"><div class="cardInner">
                <div id="mrkplc"><p>   </p></div>
            </div></div>"#,
        );
        let fields = FieldExtractor::default().extract(first_card(&doc));
        assert_eq!(fields.title, "");
        assert_eq!(fields.price, "");
        assert_eq!(fields.vendor, "Sold by Sears");
    }

    #[test]
    fn test_fields_do_not_leak_from_sibling_cards() {
        let doc = Markup::parse(
            r#"<div class="cardContainer"><div class="cardInner">
                <div class="cardProdTitle"><h4><a>First</a></h4></div>
            </div></div>
            <div class="cardContainer"><div class="cardInner">
                <div class="cardProdPricing_v2"><span class="price_v2">$2</span></div>
                <div id="mrkplc"><p>Second Seller</p></div>
            </div></div>"#,
        );
        let cards = doc.select("div.cardContainer");
        let first = FieldExtractor::default().extract(cards[0]);
        assert_eq!(first.title, "First");
        assert_eq!(first.price, "");
        assert_eq!(first.vendor, VENDOR_FALLBACK);

        let second = FieldExtractor::default().extract(cards[1]);
        assert_eq!(second.title, "");
        assert_eq!(second.price, "$2");
        assert_eq!(second.vendor, "Second Seller");
    }

    #[test]
    fn test_custom_selectors() {
        let doc = Markup::parse(
            r#"<li class="hit"><b class="name">Kettle</b><i class="cost">$9</i></li>"#,
        );
        let extractor = FieldExtractor::new(CardSelectors {
            card: "li.hit".to_string(),
            title: "b.name".to_string(),
            price: "i.cost".to_string(),
            vendor: "span.seller".to_string(),
        });
        let card = doc.select(&extractor.selectors().card)[0];
        let fields = extractor.extract(card);
        assert_eq!(fields.title, "Kettle");
        assert_eq!(fields.price, "$9");
        assert_eq!(fields.vendor, VENDOR_FALLBACK);
    }
}
