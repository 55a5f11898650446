//! Listing page parsing and pagination bookkeeping
//!
//! A listing page holds a results container with one element per result
//! hit, and optionally a "next page" link. The fetch loop that walks the
//! pages lives in the coordinator; this module turns one page into data
//! and tracks which pages a category has already visited.

use crate::crawler::extractor::ScrapedOrganization;
use crate::crawler::parser::{element_text, resolve_link, SiteSelectors};
use scraper::Html;
use std::collections::HashSet;
use url::Url;

/// One organization entry on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultHit {
    /// Absolute URL of the organization's detail page
    pub url: Url,
    /// Visible title of the entry
    pub title: String,
}

/// Parsed content of one listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    pub hits: Vec<ResultHit>,
    /// Absolute URL of the next listing page, if any
    pub next_page: Option<Url>,
}

/// Everything collected for one category
#[derive(Debug, Clone, Default)]
pub struct CategoryListing {
    pub records: Vec<ScrapedOrganization>,
    pub pages_visited: usize,
}

/// Parses a listing page
///
/// Returns `None` when the page has no results container, which ends
/// pagination for the category. Hits without a detail link are skipped.
pub fn parse_listing_page(
    html: &str,
    page_url: &Url,
    selectors: &SiteSelectors,
) -> Option<ListingPage> {
    let document = Html::parse_document(html);
    let container = document.select(&selectors.result_container).next()?;

    let mut hits = Vec::new();
    for hit in container.select(&selectors.result_hit) {
        let Some(link) = hit.select(&selectors.hit_link).next() else {
            tracing::warn!("Result hit without a title link on {}, skipping", page_url);
            continue;
        };

        let Some(url) = link
            .value()
            .attr("href")
            .and_then(|href| resolve_link(href, page_url))
        else {
            tracing::warn!("Result hit without a usable href on {}, skipping", page_url);
            continue;
        };

        hits.push(ResultHit {
            url,
            title: element_text(&link),
        });
    }

    let next_page = document
        .select(&selectors.next_page)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| resolve_link(href, page_url));

    Some(ListingPage { hits, next_page })
}

/// Tracks the listing pages visited for one category
#[derive(Debug)]
pub struct PageTrail {
    visited: HashSet<Url>,
    stop_on_repeat: bool,
}

impl PageTrail {
    /// Starts a trail at the category's first page
    pub fn new(first_page: &Url, stop_on_repeat: bool) -> Self {
        let mut visited = HashSet::new();
        visited.insert(first_page.clone());
        Self {
            visited,
            stop_on_repeat,
        }
    }

    /// Records the next page and reports whether it should be fetched
    ///
    /// Always `true` when the repeat guard is off.
    pub fn advance(&mut self, next_page: &Url) -> bool {
        let first_visit = self.visited.insert(next_page.clone());
        first_visit || !self.stop_on_repeat
    }
}
