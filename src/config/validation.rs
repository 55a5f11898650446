use crate::config::types::{Config, OutputConfig, SelectorConfig, ServerConfig, SiteConfig};
use crate::ConfigError;
use std::net::SocketAddr;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_selector_config(&config.selectors)?;
    validate_output_config(&config.output)?;
    validate_server_config(&config.server)?;
    Ok(())
}

/// Validates the landing page URL
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid base_url '{}': {}", config.base_url, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base_url '{}' must use http or https",
            config.base_url
        )));
    }

    Ok(())
}

/// Validates selector markers
///
/// Single class or id values must be one whitespace-free token. The venue
/// section is matched on its whole class list, so it may hold several.
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("category_block_class", &config.category_block_class),
        ("result_container_id", &config.result_container_id),
        ("result_hit_class", &config.result_hit_class),
        ("next_page_class", &config.next_page_class),
        ("description_class", &config.description_class),
    ] {
        validate_token(name, value)?;
    }

    if config.category_link_marker.is_empty() {
        return Err(ConfigError::Validation(
            "category_link_marker cannot be empty".to_string(),
        ));
    }

    if config.venue_section_class.split_whitespace().next().is_none() {
        return Err(ConfigError::Validation(
            "venue_section_class cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_token(name: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
    }

    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{} must be a single class or id, got '{}'",
            name, value
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.dataset_path.is_empty() {
        return Err(ConfigError::Validation(
            "dataset_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the listen address
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.bind_address.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!(
            "bind_address '{}' is not a socket address: {}",
            config.bind_address, e
        ))
    })?;

    Ok(())
}
