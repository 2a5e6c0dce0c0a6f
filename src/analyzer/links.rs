//! Link Extractor
//!
//! Finds `http(s)://` URLs, deduplicates them by exact text, and reports the
//! scheme, domain, and literal occurrence count of each.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;
use url::Url;

use crate::types::Link;

// `$-_` is a range and admits `/`, `:`, `?`, `=` and friends.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z0-9]|[$-_@.&+]|[!*(),]|%[0-9a-fA-F]{2})+").unwrap()
});

/// Extract unique links, sorted by URL.
pub fn extract(text: &str) -> Vec<Link> {
    let unique: BTreeSet<&str> = URL_PATTERN.find_iter(text).map(|m| m.as_str()).collect();

    unique
        .into_iter()
        .map(|url| {
            let (scheme, domain) = scheme_and_domain(url);
            Link {
                url: url.to_string(),
                domain,
                scheme,
                occurrence_count: text.matches(url).count(),
            }
        })
        .collect()
}

/// Scheme and the raw authority (userinfo, host casing and ports kept as
/// written). Malformed URLs are still reported, with a warning.
fn scheme_and_domain(raw: &str) -> (String, String) {
    if let Err(e) = Url::parse(raw) {
        warn!(url = raw, error = %e, "Extracted URL does not parse");
    }
    split_authority(raw)
}

fn split_authority(raw: &str) -> (String, String) {
    let Some((scheme, rest)) = raw.split_once("://") else {
        return (String::new(), String::new());
    };
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    (scheme.to_string(), rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicates_and_counts() {
        let links = extract("Visit http://example.com and http://example.com again");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "http://example.com");
        assert_eq!(links[0].domain, "example.com");
        assert_eq!(links[0].scheme, "http");
        assert_eq!(links[0].occurrence_count, 2);
    }

    #[test]
    fn test_path_query_and_port() {
        let links = extract("See https://docs.rs:8443/regex/latest?search=find now");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "https://docs.rs:8443/regex/latest?search=find");
        assert_eq!(links[0].domain, "docs.rs:8443");
        assert_eq!(links[0].scheme, "https");
    }

    #[test]
    fn test_sorted_by_url() {
        let links = extract("https://b.example.org then http://a.example.org");
        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["http://a.example.org", "https://b.example.org"]);
    }

    #[test]
    fn test_occurrence_count_is_substring_count() {
        // The shorter URL also appears inside the longer one.
        let links = extract("http://x.io http://x.io/path");
        let short = links.iter().find(|l| l.url == "http://x.io").unwrap();
        assert_eq!(short.occurrence_count, 2);
    }

    #[test]
    fn test_no_links() {
        assert!(extract("no urls here, just ftp://nope").is_empty());
    }

    #[test]
    fn test_split_authority() {
        assert_eq!(
            split_authority("http://host.example/a/b"),
            ("http".to_string(), "host.example".to_string())
        );
        assert_eq!(split_authority("nothing"), (String::new(), String::new()));
    }

    #[test]
    fn test_domain_is_authority_as_written() {
        let domain = |text: &str| extract(text)[0].domain.clone();
        assert_eq!(domain("http://example.com:80/a"), "example.com:80");
        assert_eq!(domain("https://example.com:443"), "example.com:443");
        assert_eq!(domain("http://Example.COM/a"), "Example.COM");
        assert_eq!(domain("https://user@example.com/x"), "user@example.com");
        assert_eq!(domain("http://a.io?q=1"), "a.io");
    }
}
