use url::Url;

/// Checks whether a URL lives on the same host as the crawl origin
///
/// The comparison is an exact string match on the parsed hostname: no
/// `www.` folding and no subdomain or suffix matching. Ports are ignored.
///
/// # Arguments
///
/// * `url` - The candidate URL string
/// * `origin` - The parsed origin URL
///
/// # Returns
///
/// `true` iff `url` parses and its hostname equals the origin's hostname
///
/// # Examples
///
/// ```
/// use url::Url;
/// use linkscout::url::is_same_domain;
///
/// let origin = Url::parse("https://example.com/").unwrap();
/// assert!(is_same_domain("https://example.com/about", &origin));
/// assert!(!is_same_domain("https://blog.example.com/", &origin));
/// ```
pub fn is_same_domain(url: &str, origin: &Url) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str() == origin.host_str(),
        Err(_) => false,
    }
}
