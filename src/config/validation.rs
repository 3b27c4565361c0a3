use crate::catalog::{duplicate_genre, Genre};
use crate::config::types::{Config, CrawlerConfig, ExtractionConfig, OutputConfig, SourceConfig};
use crate::ConfigError;
use std::collections::BTreeMap;
use url::Url;

/// Validates the entire configuration
///
/// Runs before any request is sent, so a bad config never starts a crawl.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_source_config(&config.source)?;
    validate_extraction_config(&config.extraction)?;
    validate_output_config(&config.output)?;
    if let Some(catalog) = &config.catalog {
        validate_catalog(catalog)?;
    }
    Ok(())
}

/// Validates crawl limits
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_artists_per_genre < 1 {
        return Err(ConfigError::Validation(format!(
            "max_artists_per_genre must be >= 1, got {}",
            config.max_artists_per_genre
        )));
    }

    if config.max_songs_per_artist < 1 {
        return Err(ConfigError::Validation(format!(
            "max_songs_per_artist must be >= 1, got {}",
            config.max_songs_per_artist
        )));
    }

    Ok(())
}

/// Validates source site configuration
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    for (name, slug) in &config.slug_overrides {
        if slug.is_empty() || !slug.chars().all(|c| c.is_alphanumeric()) {
            return Err(ConfigError::Validation(format!(
                "slug override for '{}' must be non-empty and alphanumeric, got '{}'",
                name, slug
            )));
        }
    }

    Ok(())
}

fn validate_extraction_config(config: &ExtractionConfig) -> Result<(), ConfigError> {
    if config.line_threshold < 1 {
        return Err(ConfigError::Validation(format!(
            "line_threshold must be >= 1, got {}",
            config.line_threshold
        )));
    }
    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.corpus_root.trim().is_empty() {
        return Err(ConfigError::Validation(
            "corpus_root cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates catalog overrides: known genres, non-empty artist lists
fn validate_catalog(catalog: &BTreeMap<String, Vec<String>>) -> Result<(), ConfigError> {
    let mut seen = Vec::with_capacity(catalog.len());
    for (genre, artists) in catalog {
        let parsed = genre.parse::<Genre>()?;
        if seen.contains(&parsed) {
            return Err(duplicate_genre(parsed));
        }
        seen.push(parsed);

        if artists.is_empty() {
            return Err(ConfigError::Validation(format!(
                "Catalog genre '{}' must list at least one artist",
                genre
            )));
        }

        if let Some(blank) = artists.iter().position(|a| a.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "Catalog genre '{}' has a blank artist name at position {}",
                genre, blank
            )));
        }
    }
    Ok(())
}
