//! The bookmark store: an unorganized pool plus an ordered list of folders.
//!
//! Every bookmark lives in exactly one list. All structural operations find
//! bookmarks through [`Store::locate`], and none of them fail: an id that
//! does not resolve makes the operation a no-op, reported through the return
//! value.

use serde::Serialize;

use crate::config::UnresolvedDestination;
use crate::model::{Bookmark, BookmarkId, Folder, FolderId};
use crate::netscape::{parse_bookmarks, ImportOptions};

/// One of the lists a bookmark can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Unorganized,
    /// Index into [`Store::folders`]
    Folder(usize),
}

/// Where a bookmark currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub container: Container,
    pub index: usize,
}

/// Target of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Destination {
    Unorganized,
    Folder(FolderId),
}

/// Result of [`Store::move_bookmark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No bookmark with that id; nothing changed
    NotFound,
    /// Appended to the destination list
    Moved,
    /// Destination folder missing; the bookmark was removed and not re-added
    Dropped,
    /// Destination folder missing; the bookmark was put back where it was
    Restored,
}

/// Counts reported by an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Bookmarks now in the unorganized pool
    pub imported: usize,
    /// Bookmarks the import replaced
    pub discarded: usize,
}

/// In-memory bookmark collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Store {
    unorganized: Vec<Bookmark>,
    folders: Vec<Folder>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unorganized(&self) -> &[Bookmark] {
        &self.unorganized
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Total bookmarks across the pool and all folders
    pub fn bookmark_count(&self) -> usize {
        self.unorganized.len() + self.folders.iter().map(Folder::len).sum::<usize>()
    }

    /// No bookmarks and no folders
    pub fn is_empty(&self) -> bool {
        self.unorganized.is_empty() && self.folders.is_empty()
    }

    /// Whether there is anything to export: at least one bookmark anywhere.
    pub fn is_exportable(&self) -> bool {
        !self.unorganized.is_empty() || self.folders.iter().any(|f| !f.is_empty())
    }

    /// All bookmarks with their container, pool first, then folders in order.
    pub fn bookmarks(&self) -> impl Iterator<Item = (Container, &Bookmark)> {
        let pool = self
            .unorganized
            .iter()
            .map(|b| (Container::Unorganized, b));
        let filed = self
            .folders
            .iter()
            .enumerate()
            .flat_map(|(i, f)| f.children.iter().map(move |b| (Container::Folder(i), b)));
        pool.chain(filed)
    }

    // ==================== Lookup ====================

    /// Find a bookmark: the unorganized pool first, then each folder's
    /// children in folder order. First match wins.
    pub fn locate(&self, id: &BookmarkId) -> Option<Location> {
        if let Some(index) = self.unorganized.iter().position(|b| b.id == *id) {
            return Some(Location {
                container: Container::Unorganized,
                index,
            });
        }

        self.folders.iter().enumerate().find_map(|(folder, f)| {
            f.children
                .iter()
                .position(|b| b.id == *id)
                .map(|index| Location {
                    container: Container::Folder(folder),
                    index,
                })
        })
    }

    pub fn bookmark(&self, id: &BookmarkId) -> Option<&Bookmark> {
        self.locate(id)
            .and_then(|loc| self.list(loc.container)?.get(loc.index))
    }

    pub fn folder(&self, id: &FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == *id)
    }

    pub fn folder_index(&self, id: &FolderId) -> Option<usize> {
        self.folders.iter().position(|f| f.id == *id)
    }

    /// The list behind a container, or `None` for a folder index that is
    /// out of range.
    pub fn list(&self, container: Container) -> Option<&[Bookmark]> {
        match container {
            Container::Unorganized => Some(&self.unorganized),
            Container::Folder(i) => self.folders.get(i).map(|f| f.children.as_slice()),
        }
    }

    fn list_mut(&mut self, container: Container) -> &mut Vec<Bookmark> {
        match container {
            Container::Unorganized => &mut self.unorganized,
            Container::Folder(i) => &mut self.folders[i].children,
        }
    }

    // ==================== Import ====================

    /// Replace the whole store with the anchors found in a bookmarks file.
    pub fn import_html(&mut self, html: &str, options: &ImportOptions) -> ImportSummary {
        self.replace(parse_bookmarks(html, options))
    }

    /// Replace the whole store: `bookmarks` becomes the unorganized pool and
    /// all folders are cleared. Prior organization is discarded, not merged.
    pub fn replace(&mut self, bookmarks: Vec<Bookmark>) -> ImportSummary {
        let discarded = self.bookmark_count();
        self.unorganized = bookmarks;
        self.folders.clear();
        ImportSummary {
            imported: self.unorganized.len(),
            discarded,
        }
    }

    // ==================== Folders ====================

    /// Append an empty folder. A name that is empty after trimming is
    /// ignored.
    pub fn create_folder(&mut self, name: &str) -> Option<FolderId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let folder = Folder::new(name);
        let id = folder.id;
        self.folders.push(folder);
        Some(id)
    }

    /// Remove a folder, appending its children to the unorganized pool in
    /// order. Returns how many bookmarks were relocated.
    pub fn remove_folder(&mut self, id: &FolderId) -> Option<usize> {
        let index = self.folder_index(id)?;
        let folder = self.folders.remove(index);
        let relocated = folder.children.len();
        self.unorganized.extend(folder.children);
        Some(relocated)
    }

    // ==================== Bookmarks ====================

    /// Move a bookmark to the end of the destination list.
    ///
    /// Moving within the same list moves the bookmark to its end. When the
    /// destination folder does not exist, `policy` decides whether the
    /// bookmark is dropped or put back.
    pub fn move_bookmark(
        &mut self,
        id: &BookmarkId,
        to: Destination,
        policy: UnresolvedDestination,
    ) -> MoveOutcome {
        let Some(from) = self.locate(id) else {
            return MoveOutcome::NotFound;
        };

        let bookmark = self.list_mut(from.container).remove(from.index);

        let target = match to {
            Destination::Unorganized => Some(Container::Unorganized),
            Destination::Folder(folder_id) => self.folder_index(&folder_id).map(Container::Folder),
        };

        match (target, policy) {
            (Some(container), _) => {
                self.list_mut(container).push(bookmark);
                MoveOutcome::Moved
            }
            (None, UnresolvedDestination::Drop) => MoveOutcome::Dropped,
            (None, UnresolvedDestination::Restore) => {
                self.list_mut(from.container).insert(from.index, bookmark);
                MoveOutcome::Restored
            }
        }
    }

    /// Overwrite a bookmark's title and url (both trimmed) in place.
    pub fn edit_bookmark(&mut self, id: &BookmarkId, title: &str, url: &str) -> bool {
        let Some(loc) = self.locate(id) else {
            return false;
        };
        let bookmark = &mut self.list_mut(loc.container)[loc.index];
        bookmark.title = title.trim().to_string();
        bookmark.url = url.trim().to_string();
        true
    }
}
