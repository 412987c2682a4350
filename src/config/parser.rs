use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// Every section is optional; missing keys fall back to their defaults.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use site_downloader::config::load_config;
///
/// let config = load_config(Path::new("site-downloader.toml")).unwrap();
/// println!("Writing to: {}", config.output.source_dir);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}
