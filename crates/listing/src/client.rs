// ABOUTME: SearchClient builds storefront search URLs and turns fetched pages into ResultSessions.
// ABOUTME: One blocking GET per query; failures are reported as FetchError without retries.

use url::form_urlencoded::byte_serialize;
use url::Url;

use crate::error::FetchError;
use crate::markup::Markup;
use crate::options::{SearchClientBuilder, SearchOptions, SearchQuery};
use crate::resource::fetch_html;
use crate::session::ResultSession;

/// Client for querying a storefront's search results.
#[derive(Debug, Clone)]
pub struct SearchClient {
    opts: SearchOptions,
    http: reqwest::blocking::Client,
}

impl SearchClient {
    pub fn builder() -> SearchClientBuilder {
        SearchClientBuilder::new()
    }

    pub fn new(opts: SearchOptions) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(opts.user_agent.clone())
            .timeout(opts.timeout)
            .build()
            .map_err(|e| FetchError::from_reqwest(opts.base_url.as_str(), "Client", e))?;
        Ok(Self { opts, http })
    }

    pub fn options(&self) -> &SearchOptions {
        &self.opts
    }

    /// Builds the results-page URL for `query`.
    ///
    /// Keyword and page are form-encoded; keyword and category redirects are
    /// disabled so the storefront always answers with a results page.
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url, FetchError> {
        let keyword: String = byte_serialize(query.keyword.trim().as_bytes()).collect();
        let raw = format!(
            "{}/search={}",
            self.opts.base_url.trim_end_matches('/'),
            keyword
        );
        let mut url = Url::parse(&raw).map_err(|e| {
            FetchError::invalid_url(&raw, "SearchUrl", Some(anyhow::anyhow!("invalid URL: {}", e)))
        })?;
        if url.cannot_be_a_base() {
            return Err(FetchError::invalid_url(
                raw,
                "SearchUrl",
                Some(anyhow::anyhow!("base URL must be hierarchical")),
            ));
        }

        url.query_pairs_mut()
            .append_pair("keywordSearch", "false")
            .append_pair("catPrediction", "false")
            .append_pair("previousSort", "ORIGINAL_SORT_ORDER")
            .append_pair("pageNum", &query.page.to_string())
            .append_pair("autoRedirect", "false")
            .append_pair("viewItems", &self.opts.page_size.to_string());
        Ok(url)
    }

    /// Fetches the results page for `query` and parses it into a session.
    pub fn search(&self, query: &SearchQuery) -> Result<ResultSession, FetchError> {
        let url = self.search_url(query)?;
        let html = fetch_html(&self.http, &url).inspect_err(|err| {
            tracing::warn!(error = %err, "search request failed");
        })?;
        Ok(self.session_from_html(&html))
    }

    /// Parses an already retrieved page with this client's card layout.
    pub fn session_from_html(&self, html: &str) -> ResultSession {
        ResultSession::with_selectors(Markup::parse(html), self.opts.selectors.clone())
    }
}
