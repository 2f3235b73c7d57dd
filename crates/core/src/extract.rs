//! Best-effort article extraction.
//!
//! Given raw HTML, [`extract`] recovers a `{title, date, content}` triple by
//! walking ordered selector fallback chains: the first probe that yields
//! non-empty text wins. It never fails: a field no probe can populate gets
//! the sentinel [`NOT_FOUND`]. This is a heuristic, not a guaranteed-correct
//! parse; unconventional markup degrades the result and that is accepted.

use serde::{Deserialize, Serialize};

use crate::parse::Document;
use crate::preprocess::strip_boilerplate;

/// Sentinel returned for any field no heuristic could populate.
pub const NOT_FOUND: &str = "Не найдено";

/// Containers whose cleaned text must exceed this many characters to be
/// accepted as article content.
const MIN_CONTENT_CHARS: usize = 100;

/// Best-effort extraction result. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedArticle {
    pub title: String,
    pub date: String,
    pub content: String,
}

/// A single extraction attempt: a pure document query that either yields a
/// non-empty string or defers to the next probe in the chain.
#[derive(Debug, Clone, Copy)]
enum Probe {
    /// Trimmed text of the first element matching the selector.
    Text(&'static str),
    /// Attribute of the first match, falling back to its visible text.
    /// Machine-readable values win over display strings.
    AttrOrText(&'static str, &'static str),
    /// `content` attribute of a meta tag with the given name/property.
    MetaContent(&'static str),
}

impl Probe {
    fn run(&self, doc: &Document) -> Option<String> {
        match self {
            Probe::Text(selector) => {
                let el = doc.select(selector).into_iter().next()?;
                non_empty(el.text())
            }
            Probe::AttrOrText(selector, attr) => {
                let el = doc.select(selector).into_iter().next()?;
                match el.attr(attr) {
                    Some(value) => non_empty(value.to_string()),
                    None => non_empty(el.text()),
                }
            }
            Probe::MetaContent(attr) => non_empty(doc.meta_content(attr)?),
        }
    }
}

const TITLE_PROBES: &[Probe] = &[
    Probe::Text("h1"),
    Probe::Text("article h1"),
    Probe::Text(".post-title"),
    Probe::Text(".article-title"),
    Probe::Text(r#"[class*="title"]"#),
    Probe::Text("title"),
];

const DATE_PROBES: &[Probe] = &[
    Probe::AttrOrText("time[datetime]", "datetime"),
    Probe::AttrOrText("time", "datetime"),
    Probe::AttrOrText(r#"[class*="date"]"#, "datetime"),
    Probe::AttrOrText(r#"[class*="published"]"#, "datetime"),
    Probe::AttrOrText(r#"[class*="time"]"#, "datetime"),
    Probe::MetaContent("article:published_time"),
    Probe::MetaContent("publish-date"),
];

const CONTENT_SELECTORS: &[&str] = &[
    "article",
    ".post",
    ".content",
    ".article-content",
    r#"[class*="article"]"#,
    r#"[class*="post-content"]"#,
    r#"[class*="entry-content"]"#,
    "main",
];

/// Extracts a best-effort `{title, date, content}` triple from raw HTML.
///
/// Title and date probes run against the document as parsed; the content
/// search runs against a boilerplate-stripped copy so navigation, scripts,
/// and ads cannot pollute the extracted text. Content is whitespace
/// normalized: every run of whitespace collapses to a single space.
///
/// # Example
///
/// ```rust
/// use referent_core::extract::{NOT_FOUND, extract};
///
/// let article = extract("<html><body><h1>Title</h1></body></html>");
/// assert_eq!(article.title, "Title");
/// assert_eq!(article.date, NOT_FOUND);
/// ```
pub fn extract(html: &str) -> ParsedArticle {
    let doc = Document::parse(html);

    let title = first_match(&doc, TITLE_PROBES);
    let date = first_match(&doc, DATE_PROBES);

    let cleaned = Document::parse(&strip_boilerplate(html));
    let content = extract_content(&cleaned);

    let article = ParsedArticle {
        title: title.unwrap_or_else(|| NOT_FOUND.to_string()),
        date: date.unwrap_or_else(|| NOT_FOUND.to_string()),
        content: content.unwrap_or_else(|| NOT_FOUND.to_string()),
    };
    tracing::debug!(
        title_found = article.title != NOT_FOUND,
        date_found = article.date != NOT_FOUND,
        content_chars = article.content.chars().count(),
        "extracted article"
    );
    article
}

/// Runs probes in order; the first non-empty result wins.
fn first_match(doc: &Document, probes: &[Probe]) -> Option<String> {
    probes.iter().find_map(|probe| probe.run(doc))
}

/// Picks the first semantic container with enough text, else the whole body.
///
/// The body fallback accepts any non-empty text: a page shorter than the
/// container threshold still yields its body rather than the sentinel.
fn extract_content(doc: &Document) -> Option<String> {
    for selector in CONTENT_SELECTORS {
        if let Some(el) = doc.select(selector).into_iter().next() {
            let text = normalize_whitespace(&el.clean_text());
            if text.chars().count() > MIN_CONTENT_CHARS {
                return Some(text);
            }
        }
    }

    let body = normalize_whitespace(&doc.body_text());
    if body.is_empty() { None } else { Some(body) }
}

/// Collapses all runs of whitespace to single spaces and trims the ends.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}
