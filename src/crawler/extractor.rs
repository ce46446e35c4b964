//! HTML extractor for page metadata and links
//!
//! This module pulls out everything the crawl and scrape reports need:
//! - Page title and meta description
//! - Open Graph title, description and image
//! - h1-h3 headings and a text preview from the first substantial paragraph
//! - Absolute, normalized outbound links
//!
//! Extraction is best-effort. The HTML5 parser accepts any input, and every
//! field is looked up independently, so a missing or malformed element only
//! leaves that one field empty.

use crate::url::normalize_url;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Maximum number of anchors inspected, and links returned, per page
pub const MAX_LINKS: usize = 50;

/// Maximum number of headings returned per page
pub const MAX_HEADINGS: usize = 20;

/// A paragraph must be longer than this (in characters) to become the preview
pub const MIN_PREVIEW_CHARS: usize = 40;

/// Previews are truncated to this many characters
pub const MAX_PREVIEW_CHARS: usize = 280;

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    /// The page title (from <title> tag)
    pub title: Option<String>,

    /// Content of `<meta name="description">`
    pub description: Option<String>,

    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,

    /// Non-empty h1-h3 texts in document order
    pub headings: Vec<String>,

    /// First paragraph longer than the preview threshold, truncated
    pub text_preview: Option<String>,

    /// Absolute links, normalized and de-duplicated in first-seen order
    pub links: Vec<String>,
}

/// Parses HTML content and extracts metadata and links
///
/// # Link Extraction Rules
///
/// - Only the first 50 `<a href>` elements are inspected
/// - Each href is resolved against `base_url`
/// - Results that are not `http`/`https` (`mailto:`, `javascript:`, ...) are dropped
/// - Each result is normalized, falling back to the plain absolute form
/// - Duplicates are removed, keeping first-seen order
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The URL the HTML was fetched from
///
/// # Example
///
/// ```
/// use linkscout::crawler::extract;
///
/// let html = r#"<html><head><title>Test</title></head>
/// <body><a href="/page">Link</a></body></html>"#;
/// let page = extract(html, "https://example.com/");
/// assert_eq!(page.title, Some("Test".to_string()));
/// assert_eq!(page.links, vec!["https://example.com/page".to_string()]);
/// ```
pub fn extract(html: &str, base_url: &str) -> ExtractedPage {
    let document = Html::parse_document(html);
    let base = Url::parse(base_url).ok();

    ExtractedPage {
        title: extract_title(&document),
        description: meta_content(&document, r#"meta[name="description"]"#),
        og_title: meta_content(&document, r#"meta[property="og:title"]"#),
        og_description: meta_content(&document, r#"meta[property="og:description"]"#),
        og_image: meta_content(&document, r#"meta[property="og:image"]"#),
        headings: extract_headings(&document),
        text_preview: extract_text_preview(&document),
        links: base
            .map(|base| extract_links(&document, &base))
            .unwrap_or_default(),
    }
}

/// Collects the trimmed text content of an element
fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element_text(&element))
        .filter(|s| !s.is_empty())
}

/// Reads the `content` attribute of the first element matching `selector`
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn extract_headings(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("h1, h2, h3") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| element_text(&element))
        .filter(|text| !text.is_empty())
        .take(MAX_HEADINGS)
        .collect()
}

fn extract_text_preview(document: &Html) -> Option<String> {
    let selector = Selector::parse("p").ok()?;

    document
        .select(&selector)
        .map(|element| element_text(&element))
        .find(|text| text.chars().count() > MIN_PREVIEW_CHARS)
        .map(|text| text.chars().take(MAX_PREVIEW_CHARS).collect())
}

/// Extracts outbound links from the first anchors in the document
fn extract_links(document: &Html, base_url: &Url) -> Vec<String> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&a_selector).take(MAX_LINKS) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if let Some(link) = resolve_link(href, base_url) {
            if seen.insert(link.clone()) {
                links.push(link);
            }
        }
    }

    links
}

/// Resolves a link href to a normalized absolute URL
///
/// Returns None if the link should be excluded:
/// - Empty hrefs
/// - Hrefs that fail to resolve against the base
/// - Non-HTTP(S) URLs after resolution (`mailto:`, `tel:`, `javascript:`,
///   `data:`); reported links only ever use the http and https schemes
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let absolute_url = base_url.join(href).ok()?;
    if absolute_url.scheme() != "http" && absolute_url.scheme() != "https" {
        return None;
    }

    Some(normalize_url(absolute_url.as_str()).unwrap_or_else(|_| absolute_url.to_string()))
}
