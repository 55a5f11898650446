use serde::Deserialize;

/// Landing page of the directory the harvester was written against
pub const DEFAULT_BASE_URL: &str = "https://lincolnshire.fsd.org.uk/kb5/lincs/fsd/home.page";

/// Main configuration structure for fsd-harvest
///
/// Every section falls back to its defaults, so an empty file (or no file
/// at all) describes the original directory site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Site to crawl
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Landing page listing the category blocks
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Structural markers used to locate content in the directory's HTML
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Class of each category block on the landing page
    #[serde(rename = "category-block-class")]
    pub category_block_class: String,

    /// Substring the category link's class attribute must contain
    #[serde(rename = "category-link-marker")]
    pub category_link_marker: String,

    /// Id of the element holding a listing page's result hits
    #[serde(rename = "result-container-id")]
    pub result_container_id: String,

    /// Class of a single result hit
    #[serde(rename = "result-hit-class")]
    pub result_hit_class: String,

    /// Class of the "next page" link
    #[serde(rename = "next-page-class")]
    pub next_page_class: String,

    /// Class list (space separated) of the venue field section
    #[serde(rename = "venue-section-class")]
    pub venue_section_class: String,

    /// Class of the description section
    #[serde(rename = "description-class")]
    pub description_class: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            category_block_class: "category-block".to_string(),
            category_link_marker: "caticon_".to_string(),
            result_container_id: "resultHitContainer".to_string(),
            result_hit_class: "result_hit".to_string(),
            next_page_class: "next-page".to_string(),
            venue_section_class: "field_section service_venue".to_string(),
            description_class: "description_text".to_string(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Stop paginating a category when a next-page link points at a page
    /// already visited for that category
    #[serde(rename = "stop-on-repeated-page")]
    pub stop_on_repeated_page: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            stop_on_repeated_page: true,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the JSON dataset document
    #[serde(rename = "dataset-path")]
    pub dataset_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dataset_path: "scraped_data.json".to_string(),
        }
    }
}

/// Read endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the read endpoint listens on
    #[serde(rename = "bind-address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}
