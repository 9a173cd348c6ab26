//! Detection of links that are already shortened.

use url::Url;

/// Returns `true` if `candidate` already points at the shortening service.
///
/// A candidate matches when it parses as an absolute URL whose scheme, host,
/// and explicit port (if any) equal the endpoint's. Host comparison is ASCII
/// case-insensitive. Unparseable input never matches.
///
/// This is a superficial check: it does not verify that the short code
/// exists on the service.
///
/// # Examples
///
/// ```
/// use seturl::utils::short_link::is_short_link;
/// use url::Url;
///
/// let endpoint = Url::parse("https://seturl.in/api").unwrap();
///
/// assert!(is_short_link(&endpoint, "https://seturl.in/abc"));
/// assert!(is_short_link(&endpoint, "https://SETURL.IN/abc"));
/// assert!(!is_short_link(&endpoint, "http://seturl.in/abc"));
/// assert!(!is_short_link(&endpoint, "https://example.com/seturl.in"));
/// ```
pub fn is_short_link(endpoint: &Url, candidate: &str) -> bool {
    let Ok(url) = Url::parse(candidate.trim()) else {
        return false;
    };

    if url.scheme() != endpoint.scheme() {
        return false;
    }

    let same_host = match (url.host_str(), endpoint.host_str()) {
        (Some(host), Some(base)) => host.eq_ignore_ascii_case(base),
        _ => false,
    };

    same_host && url.port() == endpoint.port()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Url {
        Url::parse("https://seturl.in/api").unwrap()
    }

    #[test]
    fn test_matches_service_links() {
        assert!(is_short_link(&endpoint(), "https://seturl.in/abc"));
        assert!(is_short_link(&endpoint(), "https://seturl.in/"));
        assert!(is_short_link(&endpoint(), "https://seturl.in"));
        assert!(is_short_link(&endpoint(), "  https://seturl.in/abc  "));
    }

    #[test]
    fn test_scheme_must_match() {
        assert!(!is_short_link(&endpoint(), "http://seturl.in/abc"));

        let plain = Url::parse("http://seturl.in/api").unwrap();
        assert!(is_short_link(&plain, "http://seturl.in/abc"));
        assert!(!is_short_link(&plain, "https://seturl.in/abc"));
    }

    #[test]
    fn test_host_is_case_insensitive() {
        assert!(is_short_link(&endpoint(), "HTTPS://SetUrl.IN/abc"));
    }

    #[test]
    fn test_other_hosts_do_not_match() {
        assert!(!is_short_link(&endpoint(), "https://example.com/long"));
        assert!(!is_short_link(&endpoint(), "https://sub.seturl.in/abc"));
        assert!(!is_short_link(&endpoint(), "https://seturl.in.evil.com/abc"));
        assert!(!is_short_link(&endpoint(), "https://example.com/?u=https://seturl.in/x"));
    }

    #[test]
    fn test_other_schemes_do_not_match() {
        assert!(!is_short_link(&endpoint(), "ftp://seturl.in/abc"));
    }

    #[test]
    fn test_garbage_does_not_match() {
        assert!(!is_short_link(&endpoint(), ""));
        assert!(!is_short_link(&endpoint(), "seturl.in/abc"));
        assert!(!is_short_link(&endpoint(), "not a url"));
    }

    #[test]
    fn test_port_must_match() {
        let local = Url::parse("http://127.0.0.1:8080/api").unwrap();

        assert!(is_short_link(&local, "http://127.0.0.1:8080/abc"));
        assert!(!is_short_link(&local, "http://127.0.0.1:9090/abc"));
        assert!(!is_short_link(&local, "http://127.0.0.1/abc"));
    }
}
