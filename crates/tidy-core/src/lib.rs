//! tidy-core: bookmark store and Netscape bookmark import/export.
//!
//! This library provides:
//! - The bookmark data model (unorganized pool plus ordered folders)
//! - Flattening import of browser bookmark HTML exports
//! - Folder creation/removal, bookmark move and edit
//! - Deterministic Netscape bookmark HTML export
//! - The [`Organizer`] controller that owns the store for a session

pub mod config;
pub mod error;
pub mod model;
pub mod netscape;
pub mod organizer;
pub mod store;

pub use config::{OrganizerConfig, UnresolvedDestination};
pub use error::{ConfigError, Result, TidyError};
pub use model::{Bookmark, BookmarkId, Folder, FolderId};
pub use netscape::{
    export_file_name, export_html, parse_bookmarks, write_export, ExportOptions, ImportOptions,
};
pub use organizer::{Command, Organizer, Outcome};
pub use store::{Container, Destination, ImportSummary, Location, MoveOutcome, Store};
