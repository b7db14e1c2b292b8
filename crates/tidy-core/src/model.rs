//! Core bookmark types.

use serde::{Deserialize, Serialize};

/// A unique bookmark identifier.
pub type BookmarkId = uuid::Uuid;

/// A unique folder identifier.
pub type FolderId = uuid::Uuid;

/// A single link imported from a bookmarks file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub title: String,
    pub url: String,
}

impl Bookmark {
    /// Create a bookmark with a fresh id.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: BookmarkId::new_v4(),
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A named, ordered group of bookmarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub title: String,
    pub children: Vec<Bookmark>,
}

impl Folder {
    /// Create an empty folder with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: FolderId::new_v4(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
