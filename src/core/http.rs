//! HTTP utilities for league API communication

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

/// Headers sent with every league API request.
pub fn json_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}
