// ABOUTME: Configuration for search retrieval: SearchOptions, SearchQuery and SearchClientBuilder.
// ABOUTME: SearchClientBuilder provides a fluent API for constructing SearchClient instances.

use std::time::Duration;

use crate::client::SearchClient;
use crate::error::FetchError;
use crate::extractors::fields::CardSelectors;

/// Storefront queried when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://www.sears.com";

/// Number of products requested per results page.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Configuration options for the search client.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub page_size: u32,
    pub user_agent: String,
    pub selectors: CardSelectors,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: "digests-listing/0.1".to_string(),
            selectors: CardSelectors::default(),
        }
    }
}

/// One keyword search on one results page (1-indexed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub page: u32,
}

impl SearchQuery {
    /// A query for the first results page.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            page: 1,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// Builder for constructing SearchClient instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct SearchClientBuilder {
    opts: SearchOptions,
}

impl SearchClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storefront base URL, e.g. `http://www.sears.com`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.base_url = base_url.into();
        self
    }

    /// Set the whole-request timeout, which also bounds reading the page.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.opts.page_size = page_size;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Use a different card layout for extraction.
    pub fn selectors(mut self, selectors: CardSelectors) -> Self {
        self.opts.selectors = selectors;
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<SearchClient, FetchError> {
        SearchClient::new(self.opts)
    }
}
