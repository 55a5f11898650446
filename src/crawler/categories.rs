//! Category discovery on the directory landing page

use crate::crawler::parser::{element_text, resolve_link, SiteSelectors};
use scraper::Html;
use url::Url;

/// A top-level directory category and the first page of its listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub title: String,
    pub url: Url,
}

/// Extracts categories from the landing page, in document order
///
/// Each category block contributes its first link whose class attribute
/// contains the configured marker. Blocks without one are skipped.
pub fn extract_categories(html: &str, base_url: &Url, selectors: &SiteSelectors) -> Vec<Category> {
    let document = Html::parse_document(html);
    let mut categories = Vec::new();

    for block in document.select(&selectors.category_block) {
        let link = block.select(&selectors.category_link).find(|a| {
            a.value()
                .attr("class")
                .is_some_and(|class| class.contains(selectors.category_link_marker.as_str()))
        });

        let Some(link) = link else {
            continue;
        };

        let Some(href) = link.value().attr("href") else {
            tracing::warn!("Category link without href in block, skipping");
            continue;
        };

        match resolve_link(href, base_url) {
            Some(url) => categories.push(Category {
                title: element_text(&link),
                url,
            }),
            None => tracing::warn!("Unresolvable category link '{}', skipping", href),
        }
    }

    categories
}
