//! Owned, mutable HTML document for one fetched page
//!
//! A `ParsedPage` is created by the crawler, handed by `&mut` to the asset
//! rewriter and then to the content extractor, and dropped afterwards. The
//! helpers here are the only places that mutate the underlying tree.

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// A parsed HTML document together with the URL it was fetched from
pub struct ParsedPage {
    url: Url,
    document: Html,
}

impl ParsedPage {
    /// Parses an HTML body fetched from `url`
    pub fn parse(url: Url, html: &str) -> Self {
        Self {
            url,
            document: Html::parse_document(html),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn document(&self) -> &Html {
        &self.document
    }

    /// Node ids of every element matching `selector`, in document order
    ///
    /// Ids stay valid while the tree is mutated, so callers collect them first
    /// and then edit nodes one by one.
    pub fn select_ids(&self, selector: &Selector) -> Vec<NodeId> {
        self.document.select(selector).map(|el| el.id()).collect()
    }

    /// Element reference for a node id, if the node is an element
    pub fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.document.tree.get(id).and_then(ElementRef::wrap)
    }

    /// Value of an attribute on the element with the given id
    pub fn attr(&self, id: NodeId, name: &str) -> Option<String> {
        self.element(id)
            .and_then(|el| el.value().attr(name))
            .map(str::to_string)
    }

    /// Overwrites an existing attribute value
    ///
    /// Returns `false` if the node is not an element or lacks the attribute.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> bool {
        let Some(mut node) = self.document.tree.get_mut(id) else {
            return false;
        };

        let Node::Element(element) = node.value() else {
            return false;
        };

        let mut updated = false;
        for (attr_name, attr_value) in element.attrs.iter_mut() {
            if &*attr_name.local == name {
                *attr_value = value.into();
                updated = true;
            }
        }
        updated
    }

    /// Detaches every element matching `selector` from the tree
    ///
    /// Returns the number of elements removed.
    pub fn remove_matching(&mut self, selector: &Selector) -> usize {
        let ids = self.select_ids(selector);
        let mut removed = 0;
        for id in ids {
            if let Some(mut node) = self.document.tree.get_mut(id) {
                node.detach();
                removed += 1;
            }
        }
        removed
    }

    /// Whitespace-normalized text of the first element matching `selector`
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.document.select(selector).next().map(element_text)
    }

    /// Inner markup of the first element matching `selector`
    pub fn first_inner_html(&self, selector: &Selector) -> Option<String> {
        self.document
            .select(selector)
            .next()
            .map(|el| el.inner_html())
    }
}

/// Text content of an element with runs of whitespace collapsed and trimmed
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
