// ABOUTME: Main library entry point for the storefront search-results extractor.
// ABOUTME: Re-exports the public API: SearchClient, ResultSession, ProductRegistry, Product, FetchError.

//! Listing - extracts product listings and result counts from storefront
//! search-results pages.
//!
//! Markup is parsed into a tree, each product card is scoped out and its
//! title, price and vendor are read into a deduplicating registry. The total
//! result count is derived separately from the page's count display.
//!
//! # Example
//!
//! ```no_run
//! use digests_listing::{FetchError, SearchClient, SearchQuery};
//!
//! fn main() -> Result<(), FetchError> {
//!     let client = SearchClient::builder().build()?;
//!     let mut session = client.search(&SearchQuery::new("blender").page(2))?;
//!     println!("{} results", session.count());
//!     print!("{}", session.products_text());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extractors;
pub mod markup;
pub mod options;
pub mod product;
pub mod registry;
pub mod resource;
pub mod session;

pub use crate::client::SearchClient;
pub use crate::error::{ErrorCode, FetchError};
pub use crate::extractors::count::{extract_count, parse_count};
pub use crate::extractors::fields::{CardSelectors, ExtractedFields, FieldExtractor, VENDOR_FALLBACK};
pub use crate::markup::Markup;
pub use crate::options::{SearchClientBuilder, SearchOptions, SearchQuery};
pub use crate::product::Product;
pub use crate::registry::ProductRegistry;
pub use crate::session::ResultSession;
