// ABOUTME: Error types for search-page retrieval including ErrorCode enum and FetchError struct.
// ABOUTME: Extraction itself never fails; only fetching a page can produce these errors.

use std::fmt;

/// Error codes representing the categories of retrieval failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    Encoding,
    Request,
    Connection,
    Timeout,
    Io,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Encoding => "unsupported encoding",
            ErrorCode::Request => "request error",
            ErrorCode::Connection => "connection error",
            ErrorCode::Timeout => "timeout",
            ErrorCode::Io => "I/O error",
        };
        write!(f, "{}", s)
    }
}

/// The error type for fetching a search-results page.
#[derive(Debug, thiserror::Error)]
pub struct FetchError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listing: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl FetchError {
    fn new(
        code: ErrorCode,
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::InvalidUrl, url, op, source)
    }

    /// Create an Encoding error.
    pub fn encoding(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Encoding, url, op, source)
    }

    /// Create a Request error.
    pub fn request(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Request, url, op, source)
    }

    /// Create a Connection error.
    pub fn connection(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Connection, url, op, source)
    }

    /// Create a Timeout error.
    pub fn timeout(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Timeout, url, op, source)
    }

    /// Create an Io error.
    pub fn io(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Io, url, op, source)
    }

    /// Classify a reqwest error into the matching code.
    pub fn from_reqwest(url: impl Into<String>, op: impl Into<String>, err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            ErrorCode::Timeout
        } else if err.is_connect() {
            ErrorCode::Connection
        } else if err.is_builder() || err.is_redirect() {
            ErrorCode::Request
        } else if err.is_decode() {
            ErrorCode::Encoding
        } else {
            ErrorCode::Io
        };
        Self::new(code, url, op, Some(anyhow::Error::new(err)))
    }

    /// Human-readable explanation printed by the command line tool.
    pub fn describe(&self) -> &'static str {
        match self.code {
            ErrorCode::InvalidUrl => "InvalidUrl: Check the search URL string",
            ErrorCode::Encoding => {
                "EncodingError: Possible Error - the page uses an unsupported text encoding"
            }
            ErrorCode::Request => "RequestError: Possible Error - issue building the GET request",
            ErrorCode::Connection => {
                "ConnectionError: Possible Error - could not connect to the search server"
            }
            ErrorCode::Timeout => "Timeout: the search server did not answer in time",
            ErrorCode::Io => "IOError: reading the search results failed",
        }
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is an Encoding error.
    pub fn is_encoding(&self) -> bool {
        self.code == ErrorCode::Encoding
    }

    /// Returns true if this is a Connection error.
    pub fn is_connection(&self) -> bool {
        self.code == ErrorCode::Connection
    }

    /// Returns true if this is a Timeout error.
    pub fn is_timeout(&self) -> bool {
        self.code == ErrorCode::Timeout
    }

    /// Returns true if this is an Io error.
    pub fn is_io(&self) -> bool {
        self.code == ErrorCode::Io
    }
}
