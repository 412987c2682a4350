use crate::config::types::{Config, OutputConfig, UserAgentConfig};
use crate::ConfigError;
use std::path::{Component, Path};

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.source_dir.is_empty() {
        return Err(ConfigError::Validation(
            "source_dir cannot be empty".to_string(),
        ));
    }

    validate_asset_dir(&config.asset_dir)
}

/// The asset directory is joined under the source root, so it must stay inside it
fn validate_asset_dir(asset_dir: &str) -> Result<(), ConfigError> {
    if asset_dir.is_empty() {
        return Err(ConfigError::Validation(
            "asset_dir cannot be empty".to_string(),
        ));
    }

    let path = Path::new(asset_dir);
    if path.is_absolute() || asset_dir.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "asset_dir must be relative to the source directory, got '{}'",
            asset_dir
        )));
    }

    if path
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(ConfigError::Validation(format!(
            "asset_dir cannot contain '..', got '{}'",
            asset_dir
        )));
    }

    Ok(())
}
