//! End-to-end audit run tests
//!
//! Drive `run_audit` against mock HTTP servers and local directories and
//! check the resulting reports: page counts, site-level findings, the
//! discoverability blend, and the empty-page-set failure mode.

use seogate::config::Config;
use seogate::model::Category;
use seogate::runner::run_audit;
use seogate::SeoGateError;
use std::io::Write;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A page that passes every audit check.
const CLEAN_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <title>A well formed page title for testing</title>
  <meta name="description" content="A meta description that is comfortably long enough to sit inside the recommended window for this check.">
  <meta property="og:title" content="OG title">
  <meta property="og:description" content="OG description">
  <meta property="og:image" content="https://example.com/og.png">
  <meta name="twitter:card" content="summary_large_image">
  <link rel="canonical" href="https://example.com/">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <script type="application/ld+json">{"@context":"https://schema.org","@type":"WebSite"}</script>
</head>
<body>
  <h1>One heading</h1>
  <img src="/a.png" alt="described">
  <a href="/about">About us</a>
</body>
</html>"#;

fn test_config() -> Config {
    let mut config = Config::default();
    config.crawler.fetch_delay_ms = 0;
    config.crawler.timeout_ms = 5_000;
    config
}

async fn mount_html(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(body.to_string()),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_remote_run_reports_missing_site_signals() {
    let server = MockServer::start().await;
    mount_html(&server, "/", CLEAN_PAGE).await;
    // robots.txt and sitemap.xml fall through to wiremock's default 404.

    let target = format!("{}/", server.uri());
    let report = run_audit(&test_config(), &target).await.unwrap();

    assert_eq!(report.pages, 1);
    assert!(report.findings.iter().any(|f| f.id == "robots-missing"));
    assert!(report.findings.iter().any(|f| f.id == "sitemap-missing"));

    // Page-level discoverability is 1.0, the site probes both failed:
    // min(1, 1.0 * 0.7 + 0.0 * 0.3) = 0.7.
    let disco = &report.categories[&Category::Discoverability];
    assert!((disco.score - 0.7).abs() < 1e-9);
}

#[tokio::test]
async fn test_remote_run_with_both_site_signals_scores_full() {
    let server = MockServer::start().await;
    mount_html(&server, "/", CLEAN_PAGE).await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nAllow: /\n"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<urlset></urlset>"))
        .mount(&server)
        .await;

    let target = format!("{}/", server.uri());
    let report = run_audit(&test_config(), &target).await.unwrap();

    assert_eq!(report.score, 100);
    assert!(!report.findings.iter().any(|f| f.id == "robots-missing"));
    assert!(!report.findings.iter().any(|f| f.id == "sitemap-missing"));
}

#[tokio::test]
async fn test_remote_run_audits_every_crawled_page() {
    let server = MockServer::start().await;
    mount_html(
        &server,
        "/",
        r#"<html><head></head><body><a href="/second">next</a></body></html>"#,
    )
    .await;
    mount_html(&server, "/second", "<html><head></head><body></body></html>").await;

    let target = format!("{}/", server.uri());
    let report = run_audit(&test_config(), &target).await.unwrap();

    assert_eq!(report.pages, 2);
    // Both bare pages miss their title.
    let title_findings = report
        .findings
        .iter()
        .filter(|f| f.id == "title-missing")
        .count();
    assert_eq!(title_findings, 2);
}

#[tokio::test]
async fn test_remote_run_with_unreachable_start_is_empty_page_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let target = format!("{}/", server.uri());
    let err = run_audit(&test_config(), &target).await.unwrap_err();
    assert!(matches!(err, SeoGateError::EmptyPageSet { .. }));
}

#[tokio::test]
async fn test_local_directory_run_skips_site_probes() {
    let dir = tempfile::TempDir::new().unwrap();
    for name in ["a.html", "b.html"] {
        let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
        file.write_all(CLEAN_PAGE.as_bytes()).unwrap();
    }

    let target = dir.path().to_str().unwrap().to_string();
    let report = run_audit(&test_config(), &target).await.unwrap();

    assert_eq!(report.pages, 2);
    // No network probes for local targets, so no site-level findings and no
    // blend: page-level discoverability stands as-is.
    assert!(!report.findings.iter().any(|f| f.id == "robots-missing"));
    assert!(!report.findings.iter().any(|f| f.id == "sitemap-missing"));
    assert_eq!(report.score, 100);
}

#[tokio::test]
async fn test_local_directory_without_html_is_empty_page_set() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not html").unwrap();

    let target = dir.path().to_str().unwrap().to_string();
    let err = run_audit(&test_config(), &target).await.unwrap_err();
    assert!(matches!(err, SeoGateError::EmptyPageSet { .. }));
}

#[tokio::test]
async fn test_single_local_file_run() {
    let dir = tempfile::TempDir::new().unwrap();
    let file_path = dir.path().join("page.html");
    std::fs::write(&file_path, "<html><head></head><body><h1>x</h1></body></html>").unwrap();

    let target = file_path.to_str().unwrap().to_string();
    let report = run_audit(&test_config(), &target).await.unwrap();

    assert_eq!(report.pages, 1);
    assert!(report.score < 100);
    assert!(report.findings.iter().any(|f| f.id == "title-missing"));
}
