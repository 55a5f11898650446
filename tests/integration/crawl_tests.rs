//! Integration tests for the crawler
//!
//! These tests use wiremock to stand in for the directory site and run the
//! full crawl from landing page to persisted dataset.

use fsd_harvest::config::Config;
use fsd_harvest::crawler::{crawl, run_harvest, Category, Harvester};
use fsd_harvest::dataset::{DatasetStore, JsonFileStore, OrganizationRecord};
use fsd_harvest::HarvestError;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, dataset_path: &str) -> Config {
    let mut config = Config::default();
    config.site.base_url = format!("{}/home.page", base_url);
    config.output.dataset_path = dataset_path.to_string();
    config
}

fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html_response(body))
        .mount(server)
        .await;
}

fn landing_page(categories: &[(&str, &str)]) -> String {
    let blocks: String = categories
        .iter()
        .map(|(href, title)| {
            format!(
                r#"<div class="category-block"><a class="caticon_x" href="{}">{}</a></div>"#,
                href, title
            )
        })
        .collect();
    format!("<html><body>{}</body></html>", blocks)
}

fn listing_page(hits: &[(&str, &str)], next_page: Option<&str>) -> String {
    let hits: String = hits
        .iter()
        .map(|(href, title)| {
            format!(
                r#"<div class="result_hit"><h4><a href="{}">{}</a></h4><p>summary</p></div>"#,
                href, title
            )
        })
        .collect();
    let next = next_page
        .map(|href| format!(r#"<a class="next-page" href="{}">Next</a>"#, href))
        .unwrap_or_default();
    format!(
        r#"<html><body><div id="resultHitContainer">{}</div>{}</body></html>"#,
        hits, next
    )
}

fn acme_detail_page() -> String {
    r#"<html><body>
        <div class="field_section service_venue">
            <dl>
                <dt>Name</dt><dd>Acme</dd>
                <dt>Address</dt><dd><span>12 Main St</span> <span>Town</span></dd>
                <dt>Postcode</dt><dd>AB1 2CD</dd>
            </dl>
        </div>
        <div class="description_text">Line1
Line2</div>
    </body></html>"#
        .to_string()
}

#[tokio::test]
async fn test_full_crawl_writes_dataset() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/home.page", landing_page(&[("/cat/support", "Family Support")])).await;
    mount_page(
        &mock_server,
        "/cat/support",
        listing_page(&[("/service/1", "Acme"), ("service/2", "Acme")], None),
    )
    .await;
    mount_page(&mock_server, "/service/1", acme_detail_page()).await;
    mount_page(&mock_server, "/cat/service/2", acme_detail_page()).await;

    let dir = TempDir::new().unwrap();
    let dataset_path = dir.path().join("scraped_data.json");
    let config = create_test_config(&base_url, dataset_path.to_str().unwrap());
    let store = JsonFileStore::new(&dataset_path);

    let outcome = crawl(&config, &store).await.expect("Crawl failed");
    assert_eq!(outcome.categories, 1);
    assert_eq!(outcome.pages_visited, 1);

    let records = store.read_records().expect("Failed to read dataset");
    assert_eq!(
        records,
        vec![
            OrganizationRecord {
                category: "Family Support".to_string(),
                name: "Acme".to_string(),
                description: "Line1 Line2".to_string(),
                address: "12 Main St, Town".to_string(),
                postcode: "AB1 2CD".to_string(),
                url: format!("{}/service/1", base_url),
            },
            OrganizationRecord {
                category: "Family Support".to_string(),
                name: "Acme".to_string(),
                description: "Line1 Line2".to_string(),
                address: "12 Main St, Town".to_string(),
                postcode: "AB1 2CD".to_string(),
                url: format!("{}/cat/service/2", base_url),
            },
        ]
    );
}

#[tokio::test]
async fn test_listing_title_overrides_page_name() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/home.page", landing_page(&[("/cat/a", "A")])).await;
    mount_page(
        &mock_server,
        "/cat/a",
        listing_page(&[("/service/1", " Listing Title ")], None),
    )
    .await;
    mount_page(&mock_server, "/service/1", acme_detail_page()).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&base_url, dir.path().join("d.json").to_str().unwrap());

    let outcome = run_harvest(&config).await.expect("Crawl failed");
    assert_eq!(outcome.organizations.len(), 1);
    assert_eq!(outcome.organizations[0].name, "Listing Title");
    assert_eq!(outcome.organizations[0].category, "A");
}

#[tokio::test]
async fn test_pagination_visits_each_page_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    for (page_path, hit, next) in [
        ("/cat/p1", ("/service/1", "First"), Some("/cat/p2")),
        ("/cat/p2", ("/service/2", "Second"), Some("p3")),
        ("/cat/p3", ("/service/3", "Third"), None),
    ] {
        Mock::given(method("GET"))
            .and(path(page_path))
            .respond_with(html_response(listing_page(&[hit], next)))
            .expect(1)
            .mount(&mock_server)
            .await;
    }
    for id in 1..=3 {
        mount_page(&mock_server, &format!("/service/{}", id), acme_detail_page()).await;
    }

    let config = create_test_config(&base_url, "unused.json");
    let harvester = Harvester::new(&config).unwrap();
    let category = Category {
        title: "Paged".to_string(),
        url: Url::parse(&format!("{}/cat/p1", base_url)).unwrap(),
    };

    let listing = harvester.scrape_category(&category).await.expect("Crawl failed");

    assert_eq!(listing.pages_visited, 3);
    let names: Vec<&str> = listing.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_next_page_cycle_stops() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/cat/p1", listing_page(&[("/service/1", "One")], Some("/cat/p2"))).await;
    mount_page(&mock_server, "/cat/p2", listing_page(&[("/service/2", "Two")], Some("/cat/p1"))).await;
    mount_page(&mock_server, "/service/1", acme_detail_page()).await;
    mount_page(&mock_server, "/service/2", acme_detail_page()).await;

    let config = create_test_config(&base_url, "unused.json");
    let harvester = Harvester::new(&config).unwrap();
    let category = Category {
        title: "Cyclic".to_string(),
        url: Url::parse(&format!("{}/cat/p1", base_url)).unwrap(),
    };

    let listing = harvester.scrape_category(&category).await.expect("Crawl failed");

    assert_eq!(listing.pages_visited, 2);
    assert_eq!(listing.records.len(), 2);
}

#[tokio::test]
async fn test_empty_listing_is_not_an_error() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/home.page",
        landing_page(&[("/cat/empty", "Empty"), ("/cat/none", "No Container")]),
    )
    .await;
    mount_page(&mock_server, "/cat/empty", listing_page(&[], None)).await;
    mount_page(
        &mock_server,
        "/cat/none",
        "<html><body><p>No services found</p></body></html>".to_string(),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let dataset_path = dir.path().join("scraped_data.json");
    let config = create_test_config(&base_url, dataset_path.to_str().unwrap());
    let store = JsonFileStore::new(&dataset_path);

    let outcome = crawl(&config, &store).await.expect("Crawl failed");

    assert_eq!(outcome.categories, 2);
    assert_eq!(outcome.pages_visited, 2);
    assert!(outcome.organizations.is_empty());
    assert!(store.read_records().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_description_persists_as_empty() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/home.page", landing_page(&[("/cat/a", "A")])).await;
    mount_page(&mock_server, "/cat/a", listing_page(&[("/service/bare", "Bare")], None)).await;
    mount_page(
        &mock_server,
        "/service/bare",
        "<html><body><h1>Bare</h1></body></html>".to_string(),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let dataset_path = dir.path().join("scraped_data.json");
    let config = create_test_config(&base_url, dataset_path.to_str().unwrap());
    let store = JsonFileStore::new(&dataset_path);

    crawl(&config, &store).await.expect("Crawl failed");

    let text = std::fs::read_to_string(&dataset_path).unwrap();
    assert!(text.contains("\"Description\": \"\""));

    let records = store.read_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "");
    assert_eq!(records[0].address, "");
    assert_eq!(records[0].postcode, "");
}

#[tokio::test]
async fn test_fetch_failure_aborts_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/home.page", landing_page(&[("/cat/a", "A")])).await;
    mount_page(
        &mock_server,
        "/cat/a",
        listing_page(&[("/service/ok", "Ok"), ("/service/broken", "Broken")], None),
    )
    .await;
    mount_page(&mock_server, "/service/ok", acme_detail_page()).await;
    Mock::given(method("GET"))
        .and(path("/service/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let dataset_path = dir.path().join("scraped_data.json");
    let config = create_test_config(&base_url, dataset_path.to_str().unwrap());
    let store = JsonFileStore::new(&dataset_path);

    let previous = vec![OrganizationRecord {
        category: "Old".to_string(),
        name: "Previous Run".to_string(),
        url: "https://example.com/old".to_string(),
        ..Default::default()
    }];
    store.write_records(&previous).unwrap();

    let result = crawl(&config, &store).await;

    match result {
        Err(HarvestError::Fetch { url, .. }) => {
            assert_eq!(url, format!("{}/service/broken", base_url));
        }
        other => panic!("expected fetch failure, got {:?}", other),
    }

    // Nothing from the failed run is persisted
    assert_eq!(store.read_records().unwrap(), previous);
}

#[tokio::test]
async fn test_landing_page_not_found_aborts_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let config = create_test_config(&base_url, "unused.json");
    let result = run_harvest(&config).await;

    assert!(matches!(result, Err(HarvestError::Fetch { .. })));
}
