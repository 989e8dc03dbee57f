use crate::config::types::{Backend, BrowserConfig, Config, OutputConfig, SitemapConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_sitemap_config(&config.sitemap)?;
    validate_browser_config(&config.browser)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates sitemap configuration
fn validate_sitemap_config(config: &SitemapConfig) -> Result<(), ConfigError> {
    validate_http_url("sitemap url", &config.url)?;

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "sitemap timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates page crawler configuration
fn validate_browser_config(config: &BrowserConfig) -> Result<(), ConfigError> {
    if config.backend == Backend::Webdriver {
        validate_http_url("webdriver-url", &config.webdriver_url)?;
    }

    if config.session_id.trim().is_empty() {
        return Err(ConfigError::Validation(
            "session-id cannot be empty".to_string(),
        ));
    }

    if config.page_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "page-timeout-secs must be >= 1 when set".to_string(),
        ));
    }

    if let Some(agent) = &config.user_agent {
        if agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user-agent cannot be blank when set".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Requires an absolute http or https URL
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(())
}
