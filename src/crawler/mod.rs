//! Crawler module for walking the directory site
//!
//! This module contains the harvesting logic, including:
//! - HTTP fetching
//! - Category discovery on the landing page
//! - Listing page parsing and pagination
//! - Organization detail extraction
//! - Overall harvest coordination

mod categories;
mod coordinator;
mod extractor;
mod fetcher;
mod paginator;
mod parser;

pub use categories::{extract_categories, Category};
pub use coordinator::{run_harvest, HarvestOutcome, Harvester};
pub use extractor::{extract_organization_details, OrganizationDetails, ScrapedOrganization};
pub use fetcher::{build_http_client, fetch_page};
pub use paginator::{parse_listing_page, CategoryListing, ListingPage, PageTrail, ResultHit};
pub use parser::{normalize_description, resolve_link, SiteSelectors};

use crate::config::Config;
use crate::dataset::{DatasetStore, OrganizationRecord};
use crate::HarvestError;

/// Runs a complete harvest and replaces the stored dataset with its result
///
/// This is the main entry point for a crawl. It will:
/// 1. Discover categories on the landing page
/// 2. Walk every category's listing pages
/// 3. Extract each organization's detail page
/// 4. Overwrite the dataset with all records, in crawl order
///
/// The dataset is only written once the whole crawl has succeeded; a
/// failed crawl leaves any previous dataset untouched.
///
/// # Arguments
///
/// * `config` - The harvester configuration
/// * `store` - Where the dataset is persisted
///
/// # Returns
///
/// * `Ok(HarvestOutcome)` - Crawl completed and dataset written
/// * `Err(HarvestError)` - Crawl or write failed
pub async fn crawl(config: &Config, store: &dyn DatasetStore) -> Result<HarvestOutcome, HarvestError> {
    let outcome = run_harvest(config).await?;

    let records: Vec<OrganizationRecord> = outcome
        .organizations
        .iter()
        .cloned()
        .map(OrganizationRecord::from)
        .collect();

    store.write_records(&records)?;
    tracing::info!("Wrote {} records to {}", records.len(), store.location());

    Ok(outcome)
}
