//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and drive real
//! fetches through the scrape and crawl operations end-to-end.

use linkscout::config::FetcherConfig;
use linkscout::crawler::{crawl, scrape, CrawlOptions, HttpFetcher};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8")
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(body))
        .expect(1)
        .mount(server)
        .await;
}

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(FetcherConfig::default()).expect("Failed to build fetcher")
}

/// Mounts a small site: home -> {about, blog, external}, about -> {home, team}
async fn mount_site(server: &MockServer) {
    mount_page(
        server,
        "/",
        r#"<html><head><title>Home</title>
            <meta name="description" content="Front page"></head>
        <body>
            <a href="/about">About</a>
            <a href="/about#history">About (history)</a>
            <a href="/blog/">Blog</a>
            <a href="https://external.invalid/page">Elsewhere</a>
        </body></html>"#,
    )
    .await;

    mount_page(
        server,
        "/about",
        r#"<html><head><title>About</title></head>
        <body><a href="/">Home</a><a href="team">Team</a></body></html>"#,
    )
    .await;

    mount_page(
        server,
        "/blog",
        r#"<html><head><title>Blog</title></head><body><p>No posts yet.</p></body></html>"#,
    )
    .await;
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_site(&mock_server).await;

    let result = crawl(
        &fetcher(),
        &base_url,
        CrawlOptions::new(10, 1, true),
        &CancellationToken::new(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(result.start_url, base_url);
    assert_eq!(result.max_pages, 10);
    assert_eq!(result.max_depth, 1);
    assert!(result.same_domain);

    let urls: Vec<&str> = result.pages.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            base_url.clone(),
            format!("{}/about", base_url),
            format!("{}/blog", base_url),
        ]
    );

    let home = &result.pages[0];
    assert_eq!(home.status, Some(200));
    assert_eq!(home.title.as_deref(), Some("Home"));
    assert_eq!(home.description.as_deref(), Some("Front page"));
    assert_eq!(
        home.links,
        vec![
            format!("{}/about", base_url),
            format!("{}/blog", base_url),
            "https://external.invalid/page".to_string(),
        ]
    );

    // Links on the depth-1 page are recorded but not followed
    assert_eq!(
        result.pages[1].links,
        vec![base_url.clone(), format!("{}/team", base_url)]
    );
    assert!(result.pages.iter().all(|p| p.error.is_none()));
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_site(&mock_server).await;
    mount_page(
        &mock_server,
        "/team",
        r#"<html><head><title>Team</title></head><body></body></html>"#,
    )
    .await;

    let result = crawl(
        &fetcher(),
        &base_url,
        CrawlOptions::new(10, 2, true),
        &CancellationToken::new(),
    )
    .await
    .expect("Crawl failed");

    let titles: Vec<Option<&str>> = result.pages.iter().map(|p| p.title.as_deref()).collect();
    assert_eq!(
        titles,
        vec![Some("Home"), Some("About"), Some("Blog"), Some("Team")]
    );
}

#[tokio::test]
async fn test_crawl_respects_max_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/a">A</a><a href="/b">B</a>"#))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(html("<title>A</title>"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(html("<title>B</title>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = crawl(
        &fetcher(),
        &base_url,
        CrawlOptions::new(2, 3, true),
        &CancellationToken::new(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(result.pages.len(), 2);
    assert_eq!(result.pages[1].title.as_deref(), Some("A"));
}

#[tokio::test]
async fn test_content_type_handling() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<title>Index</title><a href="/data.json">Data</a><a href="/missing">Gone</a>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"ok": true}"#, "application/json"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_raw("<title>Not Found</title>", "text/html; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;

    let result = crawl(
        &fetcher(),
        &base_url,
        CrawlOptions::new(10, 1, true),
        &CancellationToken::new(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(result.pages.len(), 3);

    let data = &result.pages[1];
    assert_eq!(data.url, format!("{}/data.json", base_url));
    assert_eq!(data.status, Some(200));
    assert_eq!(data.error.as_deref(), Some("Skipped non-HTML response"));
    assert!(data.title.is_none());
    assert!(data.links.is_empty());

    let missing = &result.pages[2];
    assert_eq!(missing.status, Some(404));
    assert_eq!(missing.title.as_deref(), Some("Not Found"));
    assert!(missing.error.is_none());
}

#[tokio::test]
async fn test_seed_timeout_yields_single_error_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html("<title>Too late</title>").set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(FetcherConfig {
        timeout_ms: 300,
        ..FetcherConfig::default()
    })
    .expect("Failed to build fetcher");

    let result = crawl(
        &fetcher,
        &base_url,
        CrawlOptions::default(),
        &CancellationToken::new(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(result.pages.len(), 1);
    let page = &result.pages[0];
    assert_eq!(page.url, base_url);
    assert_eq!(page.status, None);
    assert_eq!(page.error.as_deref(), Some("Request timed out after 300ms"));
    assert!(page.links.is_empty());
}

#[tokio::test]
async fn test_scrape_end_to_end() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/post",
        r#"<html>
        <head>
            <title>  Launch Notes  </title>
            <meta name="description" content="What shipped this week">
            <meta property="og:title" content="Launch Notes (OG)">
            <meta property="og:description" content="">
            <meta property="og:image" content="https://cdn.example.com/cover.png">
        </head>
        <body>
            <h1>Launch</h1>
            <h2>Fixes</h2>
            <h4>Ignored</h4>
            <p>Tiny.</p>
            <p>We shipped a faster crawler and a cleaner report format this week.</p>
            <a href="/post#comments">Comments</a>
            <a href="mailto:team@example.com">Mail</a>
            <a href="/archive">Archive</a>
        </body>
        </html>"#,
    )
    .await;

    let report = scrape(&fetcher(), &format!("{}/post/#top", base_url)).await;

    assert_eq!(report.page.url, format!("{}/post", base_url));
    assert_eq!(report.page.status, Some(200));
    assert_eq!(report.page.title.as_deref(), Some("Launch Notes"));
    assert_eq!(
        report.page.description.as_deref(),
        Some("What shipped this week")
    );
    assert_eq!(report.og_title.as_deref(), Some("Launch Notes (OG)"));
    assert_eq!(report.og_description, None);
    assert_eq!(
        report.og_image.as_deref(),
        Some("https://cdn.example.com/cover.png")
    );
    assert_eq!(report.headings, vec!["Launch", "Fixes"]);
    assert_eq!(
        report.text_preview.as_deref(),
        Some("We shipped a faster crawler and a cleaner report format this week.")
    );
    assert_eq!(
        report.page.links,
        vec![
            format!("{}/post", base_url),
            format!("{}/archive", base_url),
        ]
    );
    assert!(report.page.error.is_none());
}
