//! Netscape bookmark HTML export

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;
use crate::model::Bookmark;
use crate::store::Store;

const HEADER: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
";

const FOOTER: &str = "</DL><p>\n";

/// Options for export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Write unfiled bookmarks as top-level entries after the folders
    pub include_unorganized: bool,
}

/// Serialize the store's folders as a Netscape bookmarks file.
///
/// Folders and their children are written in stored order. The unorganized
/// pool is left out unless `include_unorganized` is set.
pub fn export_html(store: &Store, options: &ExportOptions) -> String {
    let mut html = String::from(HEADER);

    for folder in store.folders() {
        html.push_str(&format!(
            "  <DT><H3 ADD_DATE=\"0\">{}</H3>\n",
            escape_text(&folder.title)
        ));
        html.push_str("  <DL><p>\n");
        for bookmark in &folder.children {
            push_anchor(&mut html, "    ", bookmark);
        }
        html.push_str("  </DL><p>\n");
    }

    if options.include_unorganized {
        for bookmark in store.unorganized() {
            push_anchor(&mut html, "  ", bookmark);
        }
    }

    html.push_str(FOOTER);
    html
}

fn push_anchor(html: &mut String, indent: &str, bookmark: &Bookmark) {
    html.push_str(&format!(
        "{}<DT><A HREF=\"{}\" ADD_DATE=\"0\">{}</A>\n",
        indent,
        escape_text(&bookmark.url),
        escape_text(&bookmark.title)
    ));
}

/// Escape text for element content and double-quoted attributes.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// File name for an export made on `date`, e.g.
/// `organized_bookmarks_2024-03-09.html`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("organized_bookmarks_{}.html", date.format("%Y-%m-%d"))
}

/// Write an export into `dir` and return the path written.
pub fn write_export(
    store: &Store,
    options: &ExportOptions,
    dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    let path = dir.join(export_file_name(date));
    std::fs::write(&path, export_html(store, options))?;
    tracing::info!(path = %path.display(), folders = store.folders().len(), "wrote bookmark export");
    Ok(path)
}
