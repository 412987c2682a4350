//! Writes converted pages and category index pages under the output root

use crate::content::PageResult;
use crate::output::front_matter::FrontMatter;
use crate::output::paths::{compute_output_path, slugify, INDEX_FILE};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use url::Url;

/// Front matter keys never written for the site root page
const ROOT_STRIPPED_KEYS: &[&str] = &["category", "categories"];

/// File-system sink for the generated site
#[derive(Debug, Clone)]
pub struct SiteWriter {
    root: PathBuf,
}

impl SiteWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writes one page as front matter plus Markdown body
    ///
    /// Parent directories are created and an existing file is overwritten.
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Path of the written file, relative to the root
    /// * `Err(io::Error)` - Directory creation or the write failed
    pub fn save_page(&self, result: &PageResult, url: &Url) -> io::Result<PathBuf> {
        let relative_path = compute_output_path(url, &result.metadata);

        let mut front_matter = result.metadata.to_front_matter();
        if relative_path == Path::new(INDEX_FILE) {
            for key in ROOT_STRIPPED_KEYS {
                front_matter.remove(key);
            }
        }

        let document = format!("{}\n{}", front_matter.render(), result.content);
        self.write(&relative_path, &document)?;

        Ok(relative_path)
    }

    /// Writes the synthetic index page for one category
    ///
    /// # Returns
    ///
    /// * `Ok(Some(PathBuf))` - Relative path of the written `{slug}.md`
    /// * `Ok(None)` - The name has no usable slug; nothing was written
    /// * `Err(io::Error)` - The write failed
    pub fn write_category_page(&self, name: &str) -> io::Result<Option<PathBuf>> {
        let slug = slugify(name);
        if slug.is_empty() {
            return Ok(None);
        }

        let mut front_matter = FrontMatter::new();
        front_matter.insert_scalar("title", name);
        front_matter.insert_scalar("type", "category");
        front_matter.insert_scalar("template", "category");

        let relative_path = PathBuf::from(format!("{}.md", slug));
        self.write(&relative_path, &front_matter.render())?;

        Ok(Some(relative_path))
    }

    fn write(&self, relative_path: &Path, contents: &str) -> io::Result<()> {
        let full_path = self.root.join(relative_path);
        if let Some(dir) = full_path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&full_path, contents)
    }
}

/// Removes everything inside `dir`, keeping `dir` itself
///
/// A missing directory is not an error.
///
/// # Returns
///
/// * `Ok(usize)` - Number of top-level entries removed
/// * `Err(io::Error)` - An entry could not be removed
pub fn clean_directory(dir: &Path) -> io::Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        removed += 1;
    }
    Ok(removed)
}
