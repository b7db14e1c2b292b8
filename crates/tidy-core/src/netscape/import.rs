//! Flattening import of Netscape bookmark HTML.
//!
//! Browsers write folders as `<DT><H3>` headings followed by nested `<DL>`
//! lists, and rarely close their `<DT>` and `<p>` tags. The file is parsed as
//! ordinary (tolerant) HTML and only the anchors are read: every `<a>` in
//! document order becomes one bookmark. Folder structure in the input is
//! ignored.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::model::Bookmark;

lazy_static! {
    static ref ANCHOR: Selector = Selector::parse("a").unwrap();
}

/// Options for reading a bookmarks file
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOptions {
    /// Title for anchors with no text
    pub fallback_title: String,
    /// Base for relative hrefs; relative hrefs are kept as written without one
    pub base_url: Option<Url>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            fallback_title: "untitled".to_string(),
            base_url: None,
        }
    }
}

/// Extract every anchor from a bookmarks file.
///
/// Never fails: malformed markup is repaired by the HTML parser, and a file
/// without anchors yields an empty list.
pub fn parse_bookmarks(html: &str, options: &ImportOptions) -> Vec<Bookmark> {
    let document = Html::parse_document(html);
    document
        .select(&ANCHOR)
        .map(|anchor| anchor_to_bookmark(anchor, options))
        .collect()
}

fn anchor_to_bookmark(anchor: ElementRef<'_>, options: &ImportOptions) -> Bookmark {
    let text: String = anchor.text().collect();
    let title = match text.trim() {
        "" => options.fallback_title.clone(),
        t => t.to_string(),
    };
    let url = anchor
        .value()
        .attr("href")
        .map(|href| resolve_href(href, options.base_url.as_ref()))
        .unwrap_or_default();
    Bookmark::new(title, url)
}

/// Resolve an href to an absolute URL.
///
/// Absolute hrefs are returned as written (trimmed), not normalized, so an
/// export reproduces the original text.
pub fn resolve_href(href: &str, base: Option<&Url>) -> String {
    let href = href.trim();
    match Url::parse(href) {
        Ok(_) => href.to_string(),
        Err(url::ParseError::RelativeUrlWithoutBase) => base
            .and_then(|b| b.join(href).ok())
            .map(|u| u.to_string())
            .unwrap_or_else(|| href.to_string()),
        Err(_) => href.to_string(),
    }
}
