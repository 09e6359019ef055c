// Version-based cache busting for display URLs
// Author: kelexine (https://github.com/kelexine)

/// Append a `v=<version>` query parameter to a display URL so CDN and
/// browser caches refetch assets after a client upgrade.
///
/// An empty version returns the URL unchanged.
pub fn with_cache_bust(url: &str, version: &str) -> String {
    if version.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}v={}", url, separator, urlencoding::encode(version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_query_parameter() {
        assert_eq!(
            with_cache_bust("https://cdn.example/img.jpg", "0.2.0"),
            "https://cdn.example/img.jpg?v=0.2.0"
        );
    }

    #[test]
    fn test_extends_existing_query() {
        assert_eq!(
            with_cache_bust("https://cdn.example/img.jpg?token=abc", "0.2.0"),
            "https://cdn.example/img.jpg?token=abc&v=0.2.0"
        );
    }

    #[test]
    fn test_encodes_version() {
        assert_eq!(
            with_cache_bust("https://cdn.example/img.jpg", "1.0 beta"),
            "https://cdn.example/img.jpg?v=1.0%20beta"
        );
    }

    #[test]
    fn test_empty_version_is_noop() {
        assert_eq!(with_cache_bust("https://cdn.example/img.jpg", ""), "https://cdn.example/img.jpg");
    }
}
