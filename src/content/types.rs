use crate::output::FrontMatter;

/// Category assigned to pages without a `rel="category tag"` link
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Title used when no heading or `<title>` yields text
pub const UNTITLED: &str = "Untitled";

/// Metadata extracted from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub original_url: String,
    /// Capture time, `%Y-%m-%d %H:%M:%S`
    pub date: String,
    /// Primary category, the first category link on the page
    pub category: String,
    pub tags: Vec<String>,
}

impl PageMetadata {
    /// Front matter in output order: title, description, original_url, date,
    /// category, tags
    pub fn to_front_matter(&self) -> FrontMatter {
        let mut front_matter = FrontMatter::new();
        front_matter.insert_scalar("title", &self.title);
        front_matter.insert_scalar("description", &self.description);
        front_matter.insert_scalar("original_url", &self.original_url);
        front_matter.insert_scalar("date", &self.date);
        front_matter.insert_scalar("category", &self.category);
        front_matter.insert_list("tags", self.tags.clone());
        front_matter
    }
}

/// A `rel="category tag"` link as it appeared on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    pub name: String,
    /// The link's `href`, `None` when the anchor has none
    pub url: Option<String>,
}

/// Everything the crawler needs from one converted page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub metadata: PageMetadata,
    /// Markdown body
    pub content: String,
    /// Every category link on the page, duplicates included
    pub category_data: Vec<CategoryLink>,
}
