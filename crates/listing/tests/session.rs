// ABOUTME: Integration tests for ResultSession extraction over whole search-results pages.
// ABOUTME: Covers deduplication, required-field filtering, vendor fallback, counts and memoization.

use digests_listing::{Product, ResultSession, VENDOR_FALLBACK};
use pretty_assertions::assert_eq;

fn card(title: &str, price: &str, vendor: Option<&str>) -> String {
    let vendor = vendor
        .map(|v| format!(r#"<div id="mrkplc"><p class="by">Sold by</p><p>{}</p></div>"#, v))
        .unwrap_or_default();
    format!(
        r#"<div class="cardContainer">
             <div class="cardInner">
               <div class="cardProdTitle"><h4><a href="/p">{}</a></h4></div>
               <div class="cardProdPricing_v2"><span class="price_v2">{}</span></div>
               {}
             </div>
           </div>"#,
        title, price, vendor
    )
}

fn page(count_text: &str, cards: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Results</title></head><body>\n\
         <div id=\"nmbProdItems\">{}</div>\n<div id=\"results\">{}</div>\n</body></html>",
        count_text,
        cards.concat()
    )
}

#[test]
fn case_variants_collapse_and_priceless_card_is_dropped() {
    let html = page(
        "Showing 1-3 of 3",
        &[
            card("Oster 6-Speed Blender", "$29.99", Some("Kitchen Outlet")),
            card("OSTER 6-speed BLENDER", "$29.99", Some("kitchen outlet")),
            card("Ninja Blender", "", Some("Kitchen Outlet")),
        ],
    );
    let mut session = ResultSession::from_html(&html);

    let products = session.products();
    assert_eq!(products.len(), 1);
    assert_eq!(
        products.members()[0],
        Product::new("Oster 6-Speed Blender", "$29.99", "Kitchen Outlet")
    );
}

#[test]
fn untitled_card_is_excluded_regardless_of_vendor() {
    let html = page("", &[card("", "$10.00", Some("Someone"))]);
    let mut session = ResultSession::from_html(&html);
    assert!(session.products().is_empty());
}

#[test]
fn missing_vendor_falls_back_to_store() {
    let html = page("", &[card("Toaster", "$15.00", None)]);
    let mut session = ResultSession::from_html(&html);
    assert_eq!(session.products().members()[0].vendor(), VENDOR_FALLBACK);
}

#[test]
fn products_text_renders_each_block() {
    let html = page(
        "Showing 1-2 of 2",
        &[
            card("Blender", "$10", None),
            card("Kettle", "$5", Some("Tea Co")),
        ],
    );
    let mut session = ResultSession::from_html(&html);
    assert_eq!(
        session.products_text(),
        "\n----Product Information----\n Title:  Blender\n Price:  $10\nVendor:  Sold by Sears\n\
         \n----Product Information----\n Title:  Kettle\n Price:  $5\nVendor:  Tea Co\n"
    );
}

#[test]
fn count_variants() {
    let cases = [
        ("Showing 1-25 of 128 results", "128"),
        ("Showing 1-25 of 128+ results", "128+"),
        ("", "0"),
        ("no results", "0"),
    ];
    for (text, expected) in cases {
        let mut session = ResultSession::from_html(&page(text, &[]));
        assert_eq!(session.count(), expected, "count text {:?}", text);
    }

    let mut no_node = ResultSession::from_html("<html><body><p>1-25 of 9</p></body></html>");
    assert_eq!(no_node.count(), "0");
}

#[test]
fn getters_are_memoized_until_clear() {
    let html = page("Showing 1-1 of 1", &[card("Blender", "$10", None)]);
    let mut session = ResultSession::from_html(&html);

    let first = session.products().clone();
    let scanned_at = session.products().members().as_ptr();
    assert!(std::ptr::eq(session.products().members().as_ptr(), scanned_at));
    let second = session.products().clone();
    assert_eq!(first, second);
    assert_eq!(session.products_text(), session.products_text());

    let count = session.count().to_string();
    assert_eq!(session.count(), count);

    session.clear();
    assert!(!session.is_scanned());
    assert!(!session.is_counted());
    assert_eq!(session.products(), &first);
    assert!(session.is_scanned());
    assert_eq!(session.count(), count);
}

#[test]
fn reader_input_matches_string_input() {
    let html = page(
        "Showing 1-2 of 2",
        &[card("Blender", "$10", None), card("Kettle", "$5", None)],
    );
    let mut from_str = ResultSession::from_html(&html);
    let mut from_reader = ResultSession::from_reader(html.as_bytes()).unwrap();

    assert_eq!(from_str.count(), "2");
    assert_eq!(from_reader.count(), "2");
    from_str.products();
    from_reader.products();
    assert!(from_str == from_reader);
}

#[test]
fn latin1_page_from_reader_keeps_accented_fields() {
    let mut raw = page(
        "Showing 1-1 of 1",
        &[card("Cafetera Expr\u{e9}s", "$49.00", Some("Caf\u{e9} Pur\u{e9}e"))],
    )
    .into_bytes();
    // Re-encode the accented characters as single Latin-1 bytes.
    raw = String::from_utf8(raw)
        .unwrap()
        .chars()
        .map(|c| c as u32 as u8)
        .collect();

    let mut session = ResultSession::from_reader(raw.as_slice()).unwrap();
    assert_eq!(session.count(), "1");
    assert_eq!(
        session.products().members()[0],
        Product::new("Cafetera Expr\u{e9}s", "$49.00", "Caf\u{e9} Pur\u{e9}e")
    );
}
