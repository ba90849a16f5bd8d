// ABOUTME: Pre-compiled CSS selector cache shared by every markup query.
// ABOUTME: Selector strings are parsed once per process; invalid ones are cached as None.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use scraper::Selector;

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `None` for a selector that does not parse.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    {
        let cache = SELECTOR_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok();
    if compiled.is_none() {
        tracing::debug!(selector = css, "ignoring invalid selector");
    }
    let mut cache = SELECTOR_CACHE.write().unwrap_or_else(PoisonError::into_inner);
    cache
        .entry(css.to_string())
        .or_insert(compiled)
        .clone()
}
