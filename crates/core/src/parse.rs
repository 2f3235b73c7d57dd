//! HTML parsing and DOM queries.
//!
//! This module provides the [`Document`] and [`Element`] types used by the
//! extraction heuristics. Parsing is infallible: html5ever repairs whatever
//! markup it is given, and an invalid CSS selector simply matches nothing,
//! so the extractor can never fail on bad input.

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Tags whose subtrees never contribute article text.
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "nav", "header", "footer", "aside"];

/// Class tokens marking advertisement blocks.
const AD_CLASSES: &[&str] = &["ad", "advertisement"];

/// A parsed HTML document.
///
/// # Example
///
/// ```rust
/// use referent_core::parse::Document;
///
/// let doc = Document::parse("<html><head><title>Test</title></head></html>");
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string. Never fails.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects elements using a CSS selector.
    ///
    /// Invalid selectors behave like selectors that match nothing.
    pub fn select(&'_ self, selector: &str) -> Vec<Element<'_>> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.html.select(&sel).map(|element| Element { element }).collect()
    }

    /// Gets the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let sel = Selector::parse("title").ok()?;
        self.html.select(&sel).next().map(|el| el.text().collect::<String>())
    }

    /// Gets a meta tag's `content` by `name` or `property` attribute.
    pub fn meta_content(&self, attr: &str) -> Option<String> {
        for key in ["name", "property"] {
            let selector = format!("meta[{}=\"{}\"]", key, attr);
            if let Some(el) = self.select(&selector).into_iter().next()
                && let Some(content) = el.attr("content")
            {
                return Some(content.to_string());
            }
        }
        None
    }

    /// Collects the document body's text, skipping non-content subtrees.
    pub fn body_text(&self) -> String {
        match self.select("body").into_iter().next() {
            Some(body) => body.clean_text(),
            None => String::new(),
        }
    }
}

/// A single element in the document tree.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the raw text content of this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute, or `None` if absent.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Collects text from this element's subtree while skipping scripts,
    /// styles, navigation chrome, and advertisement blocks.
    pub fn clean_text(&self) -> String {
        let mut out = String::new();
        collect_clean_text(self.element, &mut out);
        out
    }
}

fn is_boilerplate(el: &ElementRef<'_>) -> bool {
    let name = el.value().name();
    if SKIP_TAGS.contains(&name) {
        return true;
    }
    if let Some(classes) = el.value().attr("class") {
        return classes
            .split_whitespace()
            .any(|token| AD_CLASSES.contains(&token.to_ascii_lowercase().as_str()));
    }
    false
}

fn collect_clean_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child)
                    && !is_boilerplate(&child_el)
                {
                    collect_clean_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}
