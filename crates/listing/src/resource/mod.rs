// ABOUTME: Blocking HTTP retrieval of search-results pages.
// ABOUTME: Checks the status, reads the body and decodes it using the declared or detected charset.

use reqwest::blocking::Client;
use url::Url;

use crate::error::FetchError;

/// Fetches `url` and returns the decoded page text.
///
/// The response is consumed inside this call, so its connection is released
/// on success and on every error path.
pub fn fetch_html(client: &Client, url: &Url) -> Result<String, FetchError> {
    tracing::debug!(url = %url, "fetching search page");

    let response = client
        .get(url.as_str())
        .send()
        .map_err(|e| FetchError::from_reqwest(url.as_str(), "Fetch", e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::io(
            url.as_str(),
            "Fetch",
            Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
        ));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response
        .bytes()
        .map_err(|e| FetchError::from_reqwest(url.as_str(), "Fetch", e))?;

    decode_body(&body, content_type.as_deref()).map_err(|charset| {
        FetchError::encoding(
            url.as_str(),
            "Decode",
            Some(anyhow::anyhow!("unsupported charset {:?}", charset)),
        )
    })
}

/// Decodes body bytes using the content-type charset, or detection when absent.
///
/// Returns the offending label when a declared charset is unknown.
fn decode_body(body: &[u8], content_type: Option<&str>) -> Result<String, String> {
    if let Some(charset) = content_type.and_then(extract_charset) {
        return match encoding_rs::Encoding::for_label(charset.as_bytes()) {
            Some(encoding) => {
                let (decoded, _, _) = encoding.decode(body);
                Ok(decoded.into_owned())
            }
            None => Err(charset),
        };
    }

    Ok(decode_detected(body))
}

/// Decodes bytes of unknown encoding, guessing the charset from the content.
///
/// Undecodable sequences become U+FFFD; this never fails.
pub(crate) fn decode_detected(body: &[u8]) -> String {
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from a Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    content_type.split(';').find_map(|part| {
        part.trim()
            .strip_prefix("charset=")
            .map(|charset| charset.trim_matches('"').trim_matches('\'').to_string())
    })
}
