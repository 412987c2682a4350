//! Per-crawl mutable state
//!
//! This module holds everything one crawl accumulates:
//! - The FIFO frontier of URLs still to visit
//! - The set of URLs already dequeued
//! - The same-origin boundary derived from the seed
//! - Category associations collected across pages
//!
//! A `CrawlSession` is owned by exactly one `Coordinator`; nothing here is
//! shared or static.

use crate::url::BaseOrigin;
use std::collections::{HashMap, HashSet, VecDeque};
use url::Url;

/// Frontier, visited set and category accumulator for one crawl
#[derive(Debug)]
pub struct CrawlSession {
    origin: BaseOrigin,
    frontier: VecDeque<Url>,
    visited: HashSet<String>,
    categories: CategoryAccumulator,
}

impl CrawlSession {
    /// Starts a session seeded with `seed`
    ///
    /// Returns `None` if the seed has no host to derive an origin from.
    pub fn new(seed: Url) -> Option<Self> {
        let origin = BaseOrigin::from_url(&seed)?;
        let mut frontier = VecDeque::new();
        frontier.push_back(seed);

        Some(Self {
            origin,
            frontier,
            visited: HashSet::new(),
            categories: CategoryAccumulator::default(),
        })
    }

    pub fn origin(&self) -> &BaseOrigin {
        &self.origin
    }

    /// Pops the next URL that has not been visited yet and marks it visited
    ///
    /// Duplicate frontier entries are discarded here, at dequeue time.
    pub fn next_url(&mut self) -> Option<Url> {
        while let Some(url) = self.frontier.pop_front() {
            if self.visited.insert(url.as_str().to_string()) {
                return Some(url);
            }
            tracing::trace!("Already visited: {}", url);
        }
        None
    }

    /// Pushes a discovered link if it is same-origin and not yet visited
    ///
    /// Returns true if the URL was added. A URL may be queued several times
    /// before its first visit.
    pub fn enqueue(&mut self, url: Url) -> bool {
        if !self.origin.contains(&url) || self.is_visited(&url) {
            return false;
        }
        self.frontier.push_back(url);
        true
    }

    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url.as_str())
    }

    /// Iterates over visited URLs in no particular order
    pub fn visited(&self) -> impl Iterator<Item = &str> {
        self.visited.iter().map(String::as_str)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn frontier_size(&self) -> usize {
        self.frontier.len()
    }

    pub fn categories_mut(&mut self) -> &mut CategoryAccumulator {
        &mut self.categories
    }

    /// Hands over the accumulated categories, leaving the session's empty
    pub fn take_categories(&mut self) -> CategoryAccumulator {
        std::mem::take(&mut self.categories)
    }
}

/// Category URL → display name, in order of first appearance
///
/// Re-inserting a known URL replaces its name but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAccumulator {
    order: Vec<String>,
    names: HashMap<String, String>,
}

impl CategoryAccumulator {
    pub fn insert(&mut self, url: &str, name: &str) {
        if self
            .names
            .insert(url.to_string(), name.to_string())
            .is_none()
        {
            self.order.push(url.to_string());
        }
    }

    pub fn get(&self, url: &str) -> Option<&str> {
        self.names.get(url).map(String::as_str)
    }

    /// Iterates `(url, name)` pairs in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .filter_map(|url| self.names.get(url).map(|name| (url.as_str(), name.as_str())))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
