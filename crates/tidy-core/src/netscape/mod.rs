//! Netscape bookmark HTML, the interchange format browsers use for
//! bookmark import and export.

pub mod export;
pub mod import;

pub use export::{escape_text, export_file_name, export_html, write_export, ExportOptions};
pub use import::{parse_bookmarks, resolve_href, ImportOptions};
