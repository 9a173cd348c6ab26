//! Request URL construction for the shortening API.

use url::Url;

/// Builds the full request URL from the API endpoint.
///
/// Parameters are appended in the order `api`, `url`, `alias`, `format`, with
/// `alias` left out when absent or empty. Every value is form-urlencoded, so
/// reserved characters in the long URL or alias cannot leak into the query.
///
/// # Examples
///
/// ```
/// use seturl::utils::api_url::build_api_url;
/// use url::Url;
///
/// let endpoint = Url::parse("https://seturl.in/api").unwrap();
/// let url = build_api_url(&endpoint, "key", "https://example.com/?a=1&b=2", None);
///
/// assert_eq!(
///     url.as_str(),
///     "https://seturl.in/api?api=key&url=https%3A%2F%2Fexample.com%2F%3Fa%3D1%26b%3D2&format=json"
/// );
/// ```
pub fn build_api_url(endpoint: &Url, api_key: &str, long_url: &str, alias: Option<&str>) -> Url {
    let mut url = endpoint.clone();

    {
        let mut query = url.query_pairs_mut();
        query.clear();
        query.append_pair("api", api_key);
        query.append_pair("url", long_url);
        if let Some(alias) = alias.filter(|a| !a.is_empty()) {
            query.append_pair("alias", alias);
        }
        query.append_pair("format", "json");
    }

    url
}
