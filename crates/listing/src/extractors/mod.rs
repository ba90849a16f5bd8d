// ABOUTME: Extraction strategies for search-results pages.
// ABOUTME: Field extraction for product cards and pattern-based result-count extraction.

//! Extraction module.
//!
//! Submodules:
//! - `fields`: title, price and vendor from one product card.
//! - `count`: the total result count from the count-display node.

pub mod count;
pub mod fields;
