//! Default response headers and merge semantics.
//!
//! # Responsibilities
//! - Define the default header set every response starts from
//! - Merge header sources with last-write-wins precedence
//!
//! # Design Decisions
//! - Merging is a pure fold over an ordered list of sources; the default
//!   set is never mutated in place
//! - Keys are matched exactly (no case folding), matching gateway behavior
//! - `BTreeMap` keeps the serialized envelope deterministic

use std::collections::BTreeMap;

/// Header map carried on events and responses.
pub type HeaderMap = BTreeMap<String, String>;

/// Cache directive header name.
pub const CACHE_CONTROL: &str = "Cache-Control";
/// CORS origin header name.
pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
/// Body media type header name.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Content type for JSON-encoded bodies.
pub const APPLICATION_JSON: &str = "application/json";
/// Content type for literal (plain text) bodies.
pub const TEXT_PLAIN: &str = "text/plain";

/// The header set every response starts from. Callers override per key.
pub fn default_headers() -> HeaderMap {
    HeaderMap::from([
        (CACHE_CONTROL.to_string(), "no-cache".to_string()),
        (ACCESS_CONTROL_ALLOW_ORIGIN.to_string(), "*".to_string()),
        (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
    ])
}

/// Fold header sources left to right; a later source wins on key collision.
pub fn merge_headers<I>(sources: I) -> HeaderMap
where
    I: IntoIterator<Item = HeaderMap>,
{
    sources.into_iter().fold(HeaderMap::new(), |mut acc, source| {
        acc.extend(source);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let headers = default_headers();
        assert_eq!(headers.get(CACHE_CONTROL).unwrap(), "no-cache");
        assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), APPLICATION_JSON);
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn test_merge_later_source_wins() {
        let overrides = HeaderMap::from([
            (CONTENT_TYPE.to_string(), TEXT_PLAIN.to_string()),
            ("my-header".to_string(), "val".to_string()),
        ]);

        let merged = merge_headers([default_headers(), overrides]);
        assert_eq!(merged.get(CONTENT_TYPE).unwrap(), TEXT_PLAIN);
        assert_eq!(merged.get("my-header").unwrap(), "val");
        assert_eq!(merged.get(CACHE_CONTROL).unwrap(), "no-cache");
    }

    #[test]
    fn test_merge_does_not_mutate_defaults() {
        let overrides = HeaderMap::from([(CONTENT_TYPE.to_string(), TEXT_PLAIN.to_string())]);
        let _ = merge_headers([default_headers(), overrides]);
        // A fresh default set still carries the JSON content type
        assert_eq!(default_headers().get(CONTENT_TYPE).unwrap(), APPLICATION_JSON);
    }

    #[test]
    fn test_merge_empty_sources() {
        assert!(merge_headers(std::iter::empty::<HeaderMap>()).is_empty());
    }
}
