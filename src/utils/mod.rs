//! Utility functions and helpers.

pub mod http;
pub mod text;

use url::Url;

use crate::error::Result;

/// Append a query parameter to a URL unless the key is already present.
pub fn with_query_param(url: &str, key: &str, value: &str) -> Result<String> {
    let mut parsed = Url::parse(url)?;
    if parsed.query_pairs().any(|(k, _)| k == key) {
        return Ok(parsed.to_string());
    }
    parsed.query_pairs_mut().append_pair(key, value);
    Ok(parsed.to_string())
}

/// Extract the domain from a URL string.
pub fn get_domain(url_str: &str) -> Option<String> {
    Url::parse(url_str)
        .ok()
        .and_then(|u| u.host_str().map(|s| s.trim_start_matches("www.").to_string()))
}

/// Turn a display name into a URL slug.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
