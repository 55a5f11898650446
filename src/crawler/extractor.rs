//! Organization detail page extraction
//!
//! A detail page carries a venue field section (a definition list of
//! `dt` labels and `dd` values) and a free-text description section.
//! Extraction is best-effort: any missing section, label, or value leaves
//! the corresponding field as `None` and is never an error.

use crate::crawler::parser::{element_text, normalize_description, SiteSelectors};
use scraper::{ElementRef, Html};
use url::Url;

const NAME_LABEL: &str = "Name";
const ADDRESS_LABEL: &str = "Address";
const POSTCODE_LABEL: &str = "Postcode";

/// Fields read from one organization detail page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationDetails {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    /// Absolute URL of the detail page
    pub url: String,
}

impl OrganizationDetails {
    /// Attaches listing context to the extracted details
    ///
    /// The listing's visible title always replaces the page's own Name.
    pub fn into_scraped(self, category: &str, listing_title: String) -> ScrapedOrganization {
        ScrapedOrganization {
            category: category.to_string(),
            name: listing_title,
            description: self.description,
            address: self.address,
            postcode: self.postcode,
            url: self.url,
        }
    }
}

/// One organization as found during a crawl, before persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedOrganization {
    pub category: String,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub url: String,
}

/// Extracts organization fields from a detail page
///
/// # Arguments
///
/// * `html` - The detail page content
/// * `page_url` - Absolute URL the page was fetched from
/// * `selectors` - Compiled site selectors
///
/// # Example
///
/// ```
/// use fsd_harvest::config::SelectorConfig;
/// use fsd_harvest::crawler::{extract_organization_details, SiteSelectors};
/// use url::Url;
///
/// let html = r#"<div class="field_section service_venue">
///     <dl><dt>Postcode</dt><dd> LN1 1AA </dd></dl>
/// </div>"#;
/// let selectors = SiteSelectors::from_config(&SelectorConfig::default()).unwrap();
/// let url = Url::parse("https://example.com/service.page?id=1").unwrap();
/// let details = extract_organization_details(html, &url, &selectors);
/// assert_eq!(details.postcode.as_deref(), Some("LN1 1AA"));
/// assert_eq!(details.description, None);
/// ```
pub fn extract_organization_details(
    html: &str,
    page_url: &Url,
    selectors: &SiteSelectors,
) -> OrganizationDetails {
    let document = Html::parse_document(html);

    let mut details = OrganizationDetails {
        url: page_url.to_string(),
        ..Default::default()
    };

    if let Some(section) = document.select(&selectors.venue_section).next() {
        details.name = labelled_value(section, NAME_LABEL, selectors).map(|dd| element_text(&dd));

        details.address = labelled_value(section, ADDRESS_LABEL, selectors).map(|dd| {
            dd.select(&selectors.address_part)
                .map(|span| element_text(&span))
                .collect::<Vec<_>>()
                .join(", ")
        });

        details.postcode =
            labelled_value(section, POSTCODE_LABEL, selectors).map(|dd| element_text(&dd));
    }

    details.description = document
        .select(&selectors.description)
        .next()
        .map(|element| normalize_description(&element.text().collect::<String>()));

    details
}

/// Finds the `dd` value following the `dt` whose text is exactly `label`
fn labelled_value<'a>(
    section: ElementRef<'a>,
    label: &str,
    selectors: &SiteSelectors,
) -> Option<ElementRef<'a>> {
    let term = section
        .select(&selectors.label)
        .find(|dt| element_text(dt) == label)?;

    term.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == "dd")
}
