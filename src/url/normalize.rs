use crate::UrlError;
use url::Url;

/// Normalizes a URL into the canonical string used for deduplication
///
/// # Normalization Steps
///
/// 1. Parse the URL as an absolute URL; reject if malformed
/// 2. Remove the fragment (everything after #)
/// 3. Remove every trailing slash from the serialized form
///
/// Query strings are kept as-is. Host lowercasing and default-port removal
/// happen only to the extent the URL parser itself performs them.
///
/// # Arguments
///
/// * `raw` - The URL string to normalize
///
/// # Returns
///
/// * `Ok(String)` - Normalized URL string
/// * `Err(UrlError)` - The input is not an absolute URL
///
/// # Examples
///
/// ```
/// use linkscout::url::normalize_url;
///
/// let url = normalize_url("https://example.com/docs/#intro").unwrap();
/// assert_eq!(url, "https://example.com/docs");
/// ```
pub fn normalize_url(raw: &str) -> Result<String, UrlError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    url.set_fragment(None);

    Ok(url.as_str().trim_end_matches('/').to_string())
}
