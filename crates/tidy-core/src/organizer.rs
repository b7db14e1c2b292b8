//! The organizer: single owner of the bookmark store.
//!
//! The UI never touches the [`Store`] directly. It builds a [`Command`],
//! hands it to [`Organizer::execute`], and redraws from [`Organizer::store`].

use crate::config::OrganizerConfig;
use crate::model::{BookmarkId, FolderId};
use crate::netscape::{export_html, ImportOptions};
use crate::store::{Destination, ImportSummary, MoveOutcome, Store};

/// Commands that can be executed on the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the store with the anchors of a bookmarks file
    Import { html: String },

    /// Append a new folder
    CreateFolder { name: String },

    /// Remove a folder, relocating its children to the unorganized pool
    RemoveFolder { id: FolderId },

    /// Move a bookmark to the end of a list
    MoveBookmark { id: BookmarkId, to: Destination },

    /// Overwrite a bookmark's title and url
    EditBookmark {
        id: BookmarkId,
        title: String,
        url: String,
    },
}

/// What a command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Imported(ImportSummary),
    FolderCreated(FolderId),
    FolderRemoved { relocated: usize },
    Moved(MoveOutcome),
    Edited,
    /// The command referred to something that does not exist, or its input
    /// was empty; the store is unchanged
    Ignored,
}

impl Outcome {
    pub fn changed_store(&self) -> bool {
        !matches!(
            self,
            Outcome::Ignored | Outcome::Moved(MoveOutcome::NotFound | MoveOutcome::Restored)
        )
    }
}

/// Owns the store for the lifetime of a session.
pub struct Organizer {
    store: Store,
    config: OrganizerConfig,
    import_options: ImportOptions,
}

impl Organizer {
    /// Create an organizer with an empty store
    pub fn new(config: OrganizerConfig) -> Self {
        let import_options = config.import_options();
        Self {
            store: Store::new(),
            config,
            import_options,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn config(&self) -> &OrganizerConfig {
        &self.config
    }

    /// Run one command to completion.
    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Import { html } => {
                let summary = self.store.import_html(&html, &self.import_options);
                tracing::info!(
                    imported = summary.imported,
                    discarded = summary.discarded,
                    "imported bookmarks"
                );
                Outcome::Imported(summary)
            }
            Command::CreateFolder { name } => match self.store.create_folder(&name) {
                Some(id) => {
                    tracing::debug!(%id, name = name.trim(), "created folder");
                    Outcome::FolderCreated(id)
                }
                None => {
                    tracing::debug!("ignored folder with blank name");
                    Outcome::Ignored
                }
            },
            Command::RemoveFolder { id } => match self.store.remove_folder(&id) {
                Some(relocated) => {
                    tracing::debug!(%id, relocated, "removed folder");
                    Outcome::FolderRemoved { relocated }
                }
                None => {
                    tracing::info!(%id, "remove: folder not found");
                    Outcome::Ignored
                }
            },
            Command::MoveBookmark { id, to } => {
                let outcome =
                    self.store
                        .move_bookmark(&id, to, self.config.unresolved_destination);
                match outcome {
                    MoveOutcome::Moved => tracing::debug!(%id, ?to, "moved bookmark"),
                    MoveOutcome::NotFound => tracing::info!(%id, "move: bookmark not found"),
                    MoveOutcome::Dropped => {
                        tracing::warn!(%id, ?to, "move: destination folder missing, bookmark dropped")
                    }
                    MoveOutcome::Restored => {
                        tracing::info!(%id, ?to, "move: destination folder missing, bookmark restored")
                    }
                }
                Outcome::Moved(outcome)
            }
            Command::EditBookmark { id, title, url } => {
                if self.store.edit_bookmark(&id, &title, &url) {
                    tracing::debug!(%id, "edited bookmark");
                    Outcome::Edited
                } else {
                    tracing::info!(%id, "edit: bookmark not found");
                    Outcome::Ignored
                }
            }
        }
    }

    /// Export the current store using the configured export options.
    pub fn export_html(&self) -> String {
        export_html(&self.store, &self.config.export_options())
    }
}

impl Default for Organizer {
    fn default() -> Self {
        Self::new(OrganizerConfig::default())
    }
}
