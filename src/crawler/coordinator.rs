//! Harvest coordinator - main crawl orchestration logic
//!
//! This module walks the directory in a single sequential pass:
//! - Fetch the landing page and discover categories
//! - For each category, walk its listing pages in order
//! - For each result hit, fetch and extract the detail page
//!
//! Every fetch is awaited before the next one starts. The first fetch
//! failure aborts the whole harvest and nothing collected so far is kept.

use crate::config::Config;
use crate::crawler::categories::{extract_categories, Category};
use crate::crawler::extractor::{extract_organization_details, OrganizationDetails, ScrapedOrganization};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::paginator::{parse_listing_page, CategoryListing, PageTrail, ResultHit};
use crate::crawler::parser::SiteSelectors;
use crate::HarvestError;
use reqwest::Client;
use url::Url;

/// Outcome of a complete harvest
#[derive(Debug, Clone, Default)]
pub struct HarvestOutcome {
    /// Number of categories discovered on the landing page
    pub categories: usize,
    /// Listing pages fetched across all categories
    pub pages_visited: usize,
    /// Organizations in crawl order
    pub organizations: Vec<ScrapedOrganization>,
}

/// Crawls one directory site
pub struct Harvester {
    client: Client,
    selectors: SiteSelectors,
    base_url: Url,
    stop_on_repeated_page: bool,
}

impl Harvester {
    /// Creates a harvester for the configured site
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Selectors compiled and HTTP client built
    /// * `Err(HarvestError)` - Invalid base URL or selector, or client build failure
    pub fn new(config: &Config) -> Result<Self, HarvestError> {
        let base_url = Url::parse(&config.site.base_url)?;
        let selectors = SiteSelectors::from_config(&config.selectors)?;
        let client = build_http_client()?;

        Ok(Self {
            client,
            selectors,
            base_url,
            stop_on_repeated_page: config.crawler.stop_on_repeated_page,
        })
    }

    /// The landing page categories are discovered from
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Runs the full harvest
    pub async fn run(&self) -> Result<HarvestOutcome, HarvestError> {
        let categories = self.discover_categories().await?;
        tracing::info!("Discovered {} categories", categories.len());

        let mut outcome = HarvestOutcome {
            categories: categories.len(),
            ..Default::default()
        };

        for category in &categories {
            tracing::info!("Scraping data for category: {}", category.title);
            let listing = self.scrape_category(category).await?;

            tracing::info!(
                "Category '{}': {} organizations across {} pages",
                category.title,
                listing.records.len(),
                listing.pages_visited
            );

            outcome.pages_visited += listing.pages_visited;
            outcome.organizations.extend(listing.records);
        }

        Ok(outcome)
    }

    /// Fetches the landing page and lists its categories
    pub async fn discover_categories(&self) -> Result<Vec<Category>, HarvestError> {
        let html = fetch_page(&self.client, &self.base_url).await?;
        Ok(extract_categories(&html, &self.base_url, &self.selectors))
    }

    /// Walks every listing page of one category
    ///
    /// Pagination ends when a page has no results container, has no
    /// next-page link, or (with the repeat guard on) links back to a page
    /// this category already visited.
    pub async fn scrape_category(&self, category: &Category) -> Result<CategoryListing, HarvestError> {
        let mut listing = CategoryListing::default();
        let mut trail = PageTrail::new(&category.url, self.stop_on_repeated_page);
        let mut page_url = category.url.clone();

        loop {
            let html = fetch_page(&self.client, &page_url).await?;
            listing.pages_visited += 1;

            let Some(page) = parse_listing_page(&html, &page_url, &self.selectors) else {
                tracing::debug!("No results container on {}", page_url);
                break;
            };

            for hit in page.hits {
                let details = self.scrape_organization(&hit).await?;
                listing
                    .records
                    .push(details.into_scraped(&category.title, hit.title));
            }

            let Some(next_page) = page.next_page else {
                break;
            };

            if !trail.advance(&next_page) {
                tracing::warn!(
                    "Next page {} of category '{}' was already visited, stopping",
                    next_page,
                    category.title
                );
                break;
            }

            page_url = next_page;
        }

        Ok(listing)
    }

    /// Fetches and extracts one organization's detail page
    pub async fn scrape_organization(&self, hit: &ResultHit) -> Result<OrganizationDetails, HarvestError> {
        let html = fetch_page(&self.client, &hit.url).await?;
        Ok(extract_organization_details(&html, &hit.url, &self.selectors))
    }
}

/// Runs a complete harvest for the given configuration
pub async fn run_harvest(config: &Config) -> Result<HarvestOutcome, HarvestError> {
    Harvester::new(config)?.run().await
}
