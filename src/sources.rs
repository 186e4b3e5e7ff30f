// src/sources.rs
//
// Registry of announcement feed endpoints. Each host-application extension
// may declare one URL; this module validates and deduplicates the lot. How
// the (owner, url) pairs are enumerated is the host's concern.

use std::collections::HashSet;

use tracing::warn;
use url::Url;

/// Validate and deduplicate candidate feed URLs.
///
/// Rejects (warn + skip) anything that does not parse or is not `https`.
/// Duplicates by exact raw-string match collapse to the first occurrence;
/// registration order is otherwise preserved.
pub fn collect<I, S>(candidates: I) -> Vec<Url>
where
    I: IntoIterator<Item = (S, S)>,
    S: AsRef<str>,
{
    let mut already_seen: HashSet<String> = HashSet::new();
    let mut sources = Vec::new();

    for (owner, raw) in candidates {
        let owner = owner.as_ref();
        let raw = raw.as_ref();
        if already_seen.contains(raw) {
            continue;
        }
        let url = match Url::parse(raw) {
            Ok(url) => url,
            Err(e) => {
                warn!(owner, url = raw, error = %e, "extension declared an invalid feed URL");
                continue;
            }
        };
        if url.scheme() != "https" {
            warn!(
                owner,
                url = raw,
                scheme = url.scheme(),
                "extension declared a feed URL with a disallowed scheme"
            );
            continue;
        }
        already_seen.insert(raw.to_string());
        sources.push(url);
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_valid_https_urls_in_order() {
        let urls = collect(vec![
            ("a", "https://a.example/feed.json"),
            ("b", "https://b.example/feed.json"),
        ]);
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].as_str(), "https://a.example/feed.json");
        assert_eq!(urls[1].as_str(), "https://b.example/feed.json");
    }

    #[test]
    fn rejects_non_https_schemes() {
        let urls = collect(vec![
            ("a", "http://plain.example/feed.json"),
            ("b", "ftp://old.example/feed.json"),
            ("c", "https://ok.example/feed.json"),
        ]);
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].host_str(), Some("ok.example"));
    }

    #[test]
    fn rejects_unparseable_urls() {
        let urls = collect(vec![("a", "not a url"), ("b", "https://ok.example/")]);
        assert_eq!(urls.len(), 1);
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let urls = collect(vec![
            ("a", "https://one.example/feed.json"),
            ("b", "https://one.example/feed.json"),
            ("c", "https://two.example/feed.json"),
        ]);
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].host_str(), Some("one.example"));
    }
}
