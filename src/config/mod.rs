//! Configuration module for fsd-harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! All keys are optional; anything left out falls back to the original site's
//! constants.
//!
//! # Example
//!
//! ```no_run
//! use fsd_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Crawling from: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, SelectorConfig, ServerConfig, SiteConfig,
    DEFAULT_BASE_URL,
};

// Re-export parser functions
pub use parser::{load_config, load_default_config, parse_config};
pub use validation::validate;
