use md5::{Digest, Md5};
use std::collections::HashMap;
use std::path::Path;
use url::Url;

/// Extension used when an asset URL's path has none
const DEFAULT_EXTENSION: &str = "jpg";

/// Kind of mirrored asset; selects the sub-directory it is stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Images,
}

impl AssetKind {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Images => "images",
        }
    }
}

/// Absolute asset URL → site-relative path it was saved under
///
/// Lives for one crawl session. An entry exists only for assets that were
/// downloaded and written successfully.
#[derive(Debug, Clone, Default)]
pub struct AssetCache {
    entries: HashMap<String, String>,
}

impl AssetCache {
    pub fn get(&self, absolute_url: &str) -> Option<&str> {
        self.entries.get(absolute_url).map(String::as_str)
    }

    pub fn insert(&mut self, absolute_url: String, local_path: String) {
        self.entries.insert(absolute_url, local_path);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// File name an asset is stored under: `md5(url).ext`
///
/// The hash covers the URL string, not the downloaded bytes, so the name is
/// known before the download and stable across runs.
///
/// ```
/// use site_downloader::assets::asset_filename;
///
/// let name = asset_filename("https://example.com/img/test.png");
/// assert!(name.ends_with(".png"));
/// assert_eq!(name.len(), 32 + 4);
/// ```
pub fn asset_filename(absolute_url: &str) -> String {
    let digest = hex::encode(Md5::digest(absolute_url.as_bytes()));
    format!("{}.{}", digest, asset_extension(absolute_url))
}

/// Extension of the URL path, `jpg` when there is none
fn asset_extension(absolute_url: &str) -> String {
    Url::parse(absolute_url)
        .ok()
        .and_then(|url| {
            Path::new(url.path())
                .extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext| !ext.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}
