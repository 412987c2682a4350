//! CSS selectors the extractor works with, parsed once

use once_cell::sync::Lazy;
use scraper::Selector;

fn parse(selector: &str) -> Selector {
    Selector::parse(selector).expect("valid built-in selector")
}

/// Post/entry title classes used by common blog themes
pub static PRIMARY_HEADING: Lazy<Selector> = Lazy::new(|| parse(".post-title, .entry-title"));

pub static FIRST_HEADING: Lazy<Selector> = Lazy::new(|| parse("h1"));

pub static DOCUMENT_TITLE: Lazy<Selector> = Lazy::new(|| parse("title"));

pub static META_DESCRIPTION: Lazy<Selector> = Lazy::new(|| parse(r#"meta[name="description"]"#));

pub static CATEGORY_LINKS: Lazy<Selector> = Lazy::new(|| parse(r#"a[rel="category tag"]"#));

pub static TAG_LINKS: Lazy<Selector> = Lazy::new(|| parse(r#"a[rel="tag"]"#));

/// Page chrome removed before the body is converted
pub static PRUNED: Lazy<Selector> = Lazy::new(|| {
    parse(
        "script, style, nav, header, footer, .sidebar, .widget, .menu, #comments, \
         .comments-area, iframe, noscript, head, .post-title, .entry-title",
    )
});

/// Content containers, most specific first; `body` always matches a parsed document
pub static BODY_CANDIDATES: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        ".entry-content",
        ".post-content",
        "article",
        "#content",
        "main",
        "body",
    ]
    .into_iter()
    .map(parse)
    .collect()
});
