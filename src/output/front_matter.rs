//! YAML front matter serialization
//!
//! Only the subset the generated site needs is emitted: double-quoted
//! scalars and block lists of double-quoted strings, in insertion order.

/// A front matter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterValue {
    Scalar(String),
    List(Vec<String>),
}

/// Ordered front matter block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: Vec<(String, FrontMatterValue)>,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a scalar, replacing any existing value under `key` in place
    pub fn insert_scalar(&mut self, key: &str, value: &str) {
        self.insert(key, FrontMatterValue::Scalar(value.to_string()));
    }

    /// Sets a list, replacing any existing value under `key` in place
    pub fn insert_list(&mut self, key: &str, items: Vec<String>) {
        self.insert(key, FrontMatterValue::List(items));
    }

    fn insert(&mut self, key: &str, value: FrontMatterValue) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Removes `key`, returning its value if it was present
    pub fn remove(&mut self, key: &str) -> Option<FrontMatterValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, key: &str) -> Option<&FrontMatterValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Renders the block including both `---` fences and a trailing newline
    ///
    /// Empty lists are omitted entirely.
    ///
    /// ```
    /// use site_downloader::output::FrontMatter;
    ///
    /// let mut fm = FrontMatter::new();
    /// fm.insert_scalar("title", "Hello");
    /// fm.insert_list("tags", vec!["a".to_string()]);
    /// assert_eq!(fm.render(), "---\ntitle: \"Hello\"\ntags:\n  - \"a\"\n---\n");
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::from("---\n");

        for (key, value) in &self.entries {
            match value {
                FrontMatterValue::Scalar(s) => {
                    out.push_str(&format!("{}: \"{}\"\n", key, escape(s)));
                }
                FrontMatterValue::List(items) if items.is_empty() => {}
                FrontMatterValue::List(items) => {
                    out.push_str(&format!("{}:\n", key));
                    for item in items {
                        out.push_str(&format!("  - \"{}\"\n", escape(item)));
                    }
                }
            }
        }

        out.push_str("---\n");
        out
    }
}

/// Escapes a value for a YAML double-quoted scalar
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
