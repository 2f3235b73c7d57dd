//! HTML cleanup before content extraction.
//!
//! Strips subtrees that never belong to article text (scripts, styles,
//! navigation chrome, and advertisement blocks) so the container heuristics
//! in [`crate::extract`] see only candidate content. Title and date probes
//! run on the raw document instead: a heading inside `<header>` must survive
//! title extraction even though the header is boilerplate for body text.

use lol_html::{HtmlRewriter, Settings, element};

/// Removes non-content subtrees from an HTML document.
///
/// Drops `script`, `style`, `noscript`, `nav`, `header`, `footer`, `aside`
/// and elements carrying `ad`/`advertisement` class markers. If rewriting
/// fails the input is returned unchanged; extraction stays best-effort.
pub fn strip_boilerplate(html: &str) -> String {
    let mut output = Vec::new();
    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: vec![
                element!("script", |el| {
                    el.remove();
                    Ok(())
                }),
                element!("style", |el| {
                    el.remove();
                    Ok(())
                }),
                element!("noscript", |el| {
                    el.remove();
                    Ok(())
                }),
                element!("nav", |el| {
                    el.remove();
                    Ok(())
                }),
                element!("header", |el| {
                    el.remove();
                    Ok(())
                }),
                element!("footer", |el| {
                    el.remove();
                    Ok(())
                }),
                element!("aside", |el| {
                    el.remove();
                    Ok(())
                }),
                element!(".ad", |el| {
                    el.remove();
                    Ok(())
                }),
                element!(".advertisement", |el| {
                    el.remove();
                    Ok(())
                }),
            ],
            ..Settings::new()
        },
        |chunk: &[u8]| output.extend_from_slice(chunk),
    );

    if rewriter.write(html.as_bytes()).is_err() {
        return html.to_string();
    }
    if rewriter.end().is_err() {
        return html.to_string();
    }

    String::from_utf8(output).unwrap_or_else(|_| html.to_string())
}
