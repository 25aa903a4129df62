//! Integration tests for the harvester
//!
//! These tests use wiremock to serve synthetic PubMed result pages and
//! exercise the full crawl cycle end-to-end.

use pubharvest::config::{CrawlConfig, OutputConfig, PageRange, SearchConfig};
use pubharvest::crawler::Harvester;
use pubharvest::output::write_csv;
use pubharvest::HarvestError;
use std::path::PathBuf;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at a mock server
fn create_test_config(base_url: &str, start: u32, end: u32) -> CrawlConfig {
    CrawlConfig {
        search: SearchConfig {
            term: "arthritis".to_string(),
            languages: vec!["chinese".to_string()],
        },
        pages: PageRange { start, end },
        output: OutputConfig {
            csv_path: PathBuf::from("data.csv"),
        },
        base_url: base_url.to_string(),
    }
}

fn article_block(id: &str, language: &str, title: &str, snippet: &str) -> String {
    format!(
        r#"<article class="full-docsum">
            <a class="docsum-title" href="/{id}/" data-article-id="{id}">{title}</a>
            <span class="language spaced-citation-item citation-part">{language}</span>
            <div class="full-view-snippet">{snippet}</div>
        </article>"#,
        id = id,
        language = language,
        title = title,
        snippet = snippet
    )
}

fn results_page(total_label: &str, articles: &[String]) -> String {
    format!(
        r#"<html><body>
        <div class="search-results">
            <label class="of-total-pages">{}</label>
            {}
        </div>
        </body></html>"#,
        total_label,
        articles.join("\n")
    )
}

/// Mounts a results page for one page number
async fn mount_page(server: &MockServer, page: u32, body: String) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("page", page.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_page_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    let page = results_page(
        "of 5",
        &[
            article_block("100001", "Chinese.", "  First   title. ", " First  snippet. "),
            article_block("100002", "Chinese.", "Second title", "Second snippet"),
        ],
    );
    mount_page(&mock_server, 1, page).await;

    let config = create_test_config(&base_url, 1, 1);
    let harvester = Harvester::new(config).expect("Failed to create harvester");
    let records = harvester.run().await.expect("Harvest failed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].url, format!("{}100001", base_url));
    assert_eq!(records[0].language, "Chinese");
    assert_eq!(records[0].title, "First title");
    assert_eq!(records[0].abstract_text, "First snippet.");
    assert_eq!(records[1].title, "Second title");
}

#[tokio::test]
async fn test_two_page_crawl_accumulates_in_page_order() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    mount_page(
        &mock_server,
        1,
        results_page(
            "of 3",
            &[
                article_block("100001", "Chinese.", "Page one first", "s1"),
                article_block("100002", "Chinese.", "Page one second", "s2"),
            ],
        ),
    )
    .await;
    mount_page(
        &mock_server,
        2,
        results_page(
            "of 3",
            &[article_block("100003", "Chinese.", "Page two first", "s3")],
        ),
    )
    .await;

    let config = create_test_config(&base_url, 1, 2);
    let harvester = Harvester::new(config).expect("Failed to create harvester");
    let records = harvester.run().await.expect("Harvest failed");

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "Page one first");
    assert_eq!(records[1].title, "Page one second");
    assert_eq!(records[2].title, "Page two first");
}

#[tokio::test]
async fn test_end_page_beyond_total_fails_before_keeping_records() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    // The first page has perfectly valid content, but the requested range
    // runs past the site-reported 3 pages.
    mount_page(
        &mock_server,
        1,
        results_page(
            "of 3",
            &[article_block("100001", "Chinese.", "Valid article", "snippet")],
        ),
    )
    .await;

    let config = create_test_config(&base_url, 1, 10);
    let harvester = Harvester::new(config).expect("Failed to create harvester");
    let err = harvester.run().await.expect_err("Expected bounds failure");

    match err {
        HarvestError::PageRangeExceeded { total_pages } => assert_eq!(total_pages, 3),
        other => panic!("Expected PageRangeExceeded, got: {}", other),
    }
}

#[tokio::test]
async fn test_end_page_equal_to_total_succeeds() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    for page in 1..=3 {
        mount_page(
            &mock_server,
            page,
            results_page(
                "of 3",
                &[article_block(
                    &format!("10000{}", page),
                    "Chinese.",
                    &format!("Article {}", page),
                    "snippet",
                )],
            ),
        )
        .await;
    }

    let config = create_test_config(&base_url, 1, 3);
    let harvester = Harvester::new(config).expect("Failed to create harvester");
    let records = harvester.run().await.expect("Equal boundary must succeed");

    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn test_start_page_beyond_total_fails() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    mount_page(&mock_server, 7, results_page("of 3", &[])).await;

    let config = create_test_config(&base_url, 7, 8);
    let harvester = Harvester::new(config).expect("Failed to create harvester");
    let err = harvester.run().await.expect_err("Expected bounds failure");

    assert!(matches!(
        err,
        HarvestError::PageRangeExceeded { total_pages: 3 }
    ));
}

#[tokio::test]
async fn test_article_missing_language_tag_fails_run() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    let broken = r#"<article class="full-docsum">
        <a class="docsum-title" data-article-id="100002">No language</a>
        <div class="full-view-snippet">snippet</div>
    </article>"#
        .to_string();
    mount_page(
        &mock_server,
        1,
        results_page(
            "of 2",
            &[
                article_block("100001", "Chinese.", "Good article", "snippet"),
                broken,
            ],
        ),
    )
    .await;

    let config = create_test_config(&base_url, 1, 1);
    let harvester = Harvester::new(config).expect("Failed to create harvester");
    let err = harvester.run().await.expect_err("Expected extraction failure");

    assert!(matches!(err, HarvestError::Extract { page: 1, .. }));
}

#[tokio::test]
async fn test_extraction_failure_on_later_page_reports_that_page() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    mount_page(
        &mock_server,
        1,
        results_page(
            "of 5",
            &[article_block("100001", "Chinese.", "Fine", "snippet")],
        ),
    )
    .await;
    // Page 2 is not a results page at all
    mount_page(
        &mock_server,
        2,
        "<html><body><p>layout changed</p></body></html>".to_string(),
    )
    .await;

    let config = create_test_config(&base_url, 1, 2);
    let harvester = Harvester::new(config).expect("Failed to create harvester");
    let err = harvester.run().await.expect_err("Expected extraction failure");

    assert!(matches!(err, HarvestError::Extract { page: 2, .. }));
}

#[tokio::test]
async fn test_non_numeric_page_count_fails_run() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    mount_page(&mock_server, 1, results_page("of many", &[])).await;

    let config = create_test_config(&base_url, 1, 1);
    let harvester = Harvester::new(config).expect("Failed to create harvester");
    let err = harvester.run().await.expect_err("Expected extraction failure");

    assert!(matches!(err, HarvestError::Extract { page: 1, .. }));
}

#[tokio::test]
async fn test_transport_failure_is_fatal() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, 1, 1);
    let harvester = Harvester::new(config).expect("Failed to create harvester");
    let err = harvester.run().await.expect_err("Expected transport failure");

    assert!(matches!(err, HarvestError::Http { .. }));
}

#[tokio::test]
async fn test_harvest_to_csv_end_to_end() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    mount_page(
        &mock_server,
        1,
        results_page(
            "of 1",
            &[
                article_block("100001", "Chinese.", "First title", "Snippet, with a comma"),
                article_block("100002", "French.", "Second title", "Plain snippet"),
            ],
        ),
    )
    .await;

    let config = create_test_config(&base_url, 1, 1);
    let harvester = Harvester::new(config).expect("Failed to create harvester");
    let records = harvester.run().await.expect("Harvest failed");

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let csv_path = dir.path().join("data.csv");
    write_csv(&records, &csv_path).expect("CSV write failed");

    let content = std::fs::read_to_string(&csv_path).expect("Failed to read CSV");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Url,Language,Title,Abstract");
    assert!(lines[1].starts_with(&format!("{}100001,Chinese,First title,", base_url)));
    assert!(lines[1].contains("\"Snippet, with a comma\""));
    assert!(lines[2].contains("French"));
}
