//! Shared HTML helpers
//!
//! This module compiles the configured structural markers into `scraper`
//! selectors once per harvest, and holds the small text and link helpers
//! the page-specific parsers share.

use crate::config::SelectorConfig;
use crate::HarvestError;
use scraper::{ElementRef, Selector};
use url::Url;

/// Selectors for every structure the harvester looks for
#[derive(Debug, Clone)]
pub struct SiteSelectors {
    /// Category blocks on the landing page
    pub category_block: Selector,
    /// Candidate category links inside a block
    pub category_link: Selector,
    /// Substring the category link's class attribute must contain
    pub category_link_marker: String,
    /// Results container on a listing page
    pub result_container: Selector,
    /// One result hit inside the container
    pub result_hit: Selector,
    /// Detail link inside a result hit
    pub hit_link: Selector,
    /// "Next page" link on a listing page
    pub next_page: Selector,
    /// Venue field section on a detail page
    pub venue_section: Selector,
    /// Label nodes inside the venue section
    pub label: Selector,
    /// Inline sub-spans of an address value
    pub address_part: Selector,
    /// Description section on a detail page
    pub description: Selector,
}

impl SiteSelectors {
    /// Compiles the selectors described by the configuration
    pub fn from_config(config: &SelectorConfig) -> Result<Self, HarvestError> {
        Ok(Self {
            category_block: compile(&class_selector(&config.category_block_class))?,
            category_link: compile("a[class]")?,
            category_link_marker: config.category_link_marker.clone(),
            result_container: compile(&id_selector(&config.result_container_id))?,
            result_hit: compile(&class_selector(&config.result_hit_class))?,
            hit_link: compile("h4 a")?,
            next_page: compile(&format!("a{}", class_selector(&config.next_page_class)))?,
            venue_section: compile(&class_selector(&config.venue_section_class))?,
            label: compile("dt")?,
            address_part: compile("span")?,
            description: compile(&class_selector(&config.description_class))?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector, HarvestError> {
    Selector::parse(selector).map_err(|e| HarvestError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Builds a selector matching elements that carry every class in `classes`
///
/// Attribute selectors are used instead of `.class` so class names with
/// characters that are special in CSS still match literally.
fn class_selector(classes: &str) -> String {
    classes
        .split_whitespace()
        .map(|class| format!("[class~=\"{}\"]", escape_quotes(class)))
        .collect()
}

fn id_selector(id: &str) -> String {
    format!("[id=\"{}\"]", escape_quotes(id))
}

fn escape_quotes(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Returns the element's text content with surrounding whitespace trimmed
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Normalizes free-form description text
///
/// Trims the text, then replaces each newline and non-breaking space with a
/// single space.
pub fn normalize_description(raw: &str) -> String {
    raw.trim().replace(['\n', '\u{a0}'], " ")
}

/// Resolves an href against the page it was found on
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    base_url.join(href.trim()).ok()
}
