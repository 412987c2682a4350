use serde::Deserialize;

/// Main configuration structure for Site-Downloader
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value: `Name/Version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Root directory that receives the Markdown tree
    #[serde(rename = "source-dir", default = "default_source_dir")]
    pub source_dir: String,

    /// Directory under the source root where mirrored assets are stored
    #[serde(rename = "asset-dir", default = "default_asset_dir")]
    pub asset_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            asset_dir: default_asset_dir(),
        }
    }
}

fn default_crawler_name() -> String {
    "StaticForge".to_string()
}

fn default_crawler_version() -> String {
    "1.0".to_string()
}

fn default_source_dir() -> String {
    "content".to_string()
}

fn default_asset_dir() -> String {
    "assets".to_string()
}
