//! Application state and main render loop

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use tidy_core::{
    write_export, Bookmark, BookmarkId, Command, Destination, FolderId, MoveOutcome, Organizer,
    Outcome,
};

use crate::keybindings::{move_mode_action, normal_mode_action, Action};
use crate::mode::Mode;

/// The two lists on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Unorganized,
    Folders,
}

impl Pane {
    fn other(self) -> Self {
        match self {
            Pane::Unorganized => Pane::Folders,
            Pane::Folders => Pane::Unorganized,
        }
    }
}

/// A line in the folders pane: a folder header or one of its bookmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FolderRow {
    Folder(usize),
    Bookmark(usize, usize),
}

impl FolderRow {
    fn folder(self) -> usize {
        match self {
            FolderRow::Folder(f) | FolderRow::Bookmark(f, _) => f,
        }
    }
}

/// Main application state
pub struct App {
    /// Current mode (NORMAL, COMMAND, MOVE)
    pub mode: Mode,
    /// Owner of the bookmark store
    organizer: Organizer,
    /// Where `x` / `:export` writes
    export_dir: PathBuf,
    /// Pane with the cursor
    pub pane: Pane,
    /// Cursor row in the unorganized pane
    pub pool_cursor: usize,
    /// Cursor row in the folders pane
    pub folder_cursor: usize,
    /// Bookmark picked up with `m`
    pub held: Option<BookmarkId>,
    /// Command input buffer
    pub command_buffer: String,
    /// Status message
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
}

impl App {
    pub fn new(organizer: Organizer, export_dir: PathBuf) -> Self {
        Self {
            mode: Mode::Normal,
            organizer,
            export_dir,
            pane: Pane::Unorganized,
            pool_cursor: 0,
            folder_cursor: 0,
            held: None,
            command_buffer: String::new(),
            status_message: None,
            show_help: false,
        }
    }

    pub fn organizer(&self) -> &Organizer {
        &self.organizer
    }

    fn folder_rows(&self) -> Vec<FolderRow> {
        let mut rows = Vec::new();
        for (f, folder) in self.organizer.store().folders().iter().enumerate() {
            rows.push(FolderRow::Folder(f));
            rows.extend((0..folder.children.len()).map(|c| FolderRow::Bookmark(f, c)));
        }
        rows
    }

    fn pane_len(&self, pane: Pane) -> usize {
        match pane {
            Pane::Unorganized => self.organizer.store().unorganized().len(),
            Pane::Folders => self.folder_rows().len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.pane {
            Pane::Unorganized => &mut self.pool_cursor,
            Pane::Folders => &mut self.folder_cursor,
        }
    }

    /// Keep both cursors on an existing row after the store changed
    fn clamp_cursors(&mut self) {
        let pool_len = self.pane_len(Pane::Unorganized);
        let folder_len = self.pane_len(Pane::Folders);
        self.pool_cursor = self.pool_cursor.min(pool_len.saturating_sub(1));
        self.folder_cursor = self.folder_cursor.min(folder_len.saturating_sub(1));
    }

    /// The bookmark under the cursor, if the cursor is on one
    pub fn cursor_bookmark(&self) -> Option<&Bookmark> {
        let store = self.organizer.store();
        match self.pane {
            Pane::Unorganized => store.unorganized().get(self.pool_cursor),
            Pane::Folders => match self.folder_rows().get(self.folder_cursor)? {
                FolderRow::Bookmark(f, c) => store.folders()[*f].children.get(*c),
                FolderRow::Folder(_) => None,
            },
        }
    }

    /// The folder the cursor is in (header or child row)
    pub fn cursor_folder(&self) -> Option<FolderId> {
        if self.pane != Pane::Folders {
            return None;
        }
        let row = self.folder_rows().get(self.folder_cursor).copied()?;
        Some(self.organizer.store().folders()[row.folder()].id)
    }

    // ==================== Rendering ====================

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Status bar at top, panes in middle, command line at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        self.render_status_bar(frame, chunks[0]);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.render_unorganized(frame, panes[0]);
        self.render_folders(frame, panes[1]);
        self.render_command_line(frame, chunks[2]);

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let store = self.organizer.store();
        let mode_color = match self.mode {
            Mode::Normal => Color::Blue,
            Mode::Command => Color::Magenta,
            Mode::Move => Color::Yellow,
        };

        let mut spans = vec![
            Span::styled(
                format!(" [{}] ", self.mode.short_code()),
                Style::default().fg(mode_color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "{} bookmarks | {} folders ",
                store.bookmark_count(),
                store.folders().len()
            )),
        ];
        if let Some(held) = self.held.and_then(|id| store.bookmark(&id)) {
            spans.push(Span::styled(
                format!("| holding: {} ", held.title),
                Style::default().fg(Color::Yellow),
            ));
        }

        let status_bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(status_bar, area);
    }

    fn row_style(&self, pane: Pane, row: usize, id: Option<BookmarkId>) -> Style {
        let mut style = Style::default();
        if id.is_some() && id == self.held {
            style = style.fg(Color::Yellow).add_modifier(Modifier::ITALIC);
        }
        let cursor = match pane {
            Pane::Unorganized => self.pool_cursor,
            Pane::Folders => self.folder_cursor,
        };
        if self.pane == pane && row == cursor {
            style = style.bg(Color::Blue).fg(Color::White);
        }
        style
    }

    fn pane_block(&self, title: &str, pane: Pane) -> Block<'static> {
        let border = if self.pane == pane {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(border)
    }

    fn render_unorganized(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .organizer
            .store()
            .unorganized()
            .iter()
            .enumerate()
            .map(|(i, b)| {
                ListItem::new(Line::from(vec![
                    Span::raw(b.title.clone()),
                    Span::styled(format!("  {}", b.url), Style::default().fg(Color::DarkGray)),
                ]))
                .style(self.row_style(Pane::Unorganized, i, Some(b.id)))
            })
            .collect();

        let list = List::new(items).block(self.pane_block("Unorganized", Pane::Unorganized));
        frame.render_widget(list, area);
    }

    fn render_folders(&self, frame: &mut Frame, area: Rect) {
        let folders = self.organizer.store().folders();
        let items: Vec<ListItem> = self
            .folder_rows()
            .into_iter()
            .enumerate()
            .map(|(i, row)| match row {
                FolderRow::Folder(f) => {
                    let folder = &folders[f];
                    ListItem::new(format!("{} ({})", folder.title, folder.len()))
                        .style(self.row_style(Pane::Folders, i, None).add_modifier(Modifier::BOLD))
                }
                FolderRow::Bookmark(f, c) => {
                    let b = &folders[f].children[c];
                    ListItem::new(format!("  {}", b.title))
                        .style(self.row_style(Pane::Folders, i, Some(b.id)))
                }
            })
            .collect();

        let list = List::new(items).block(self.pane_block("Folders", Pane::Folders));
        frame.render_widget(list, area);
    }

    fn render_command_line(&self, frame: &mut Frame, area: Rect) {
        let content = match self.mode {
            Mode::Command => format!(":{}", self.command_buffer),
            _ => self
                .status_message
                .clone()
                .unwrap_or_else(|| "Press ? for help | : for commands".to_string()),
        };

        frame.render_widget(Paragraph::new(content), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
bookmark-tidy - Help

Navigation:
  j/k     - Move down/up
  Tab     - Switch between Unorganized and Folders

Organizing:
  m       - Pick up the bookmark under the cursor
  Enter   - Drop it onto the pane / folder under the cursor
  Esc     - Put it down where it was
  n       - New folder
  d       - Remove the folder under the cursor
  e       - Edit the bookmark under the cursor
  x       - Export organized bookmarks

Commands (: to enter command mode):
  :folder <name>         - Create a folder
  :rmdir                 - Remove the folder under the cursor
  :edit <title> | <url>  - Edit the bookmark under the cursor
  :export                - Export organized bookmarks
  :import <path>         - Replace everything with a bookmarks file
  :q                     - Quit

Other:
  ?       - Toggle this help
  q       - Quit
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(70, 85, area);
        frame.render_widget(ratatui::widgets::Clear, help_area);
        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, help_area);
    }

    // ==================== Input ====================

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> bool {
        match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Command => self.handle_command_key(code),
            Mode::Move => {
                self.handle_move_key(code);
                false
            }
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        let Some(action) = normal_mode_action(code) else {
            return false;
        };
        match action {
            Action::Quit => return true,
            Action::EnterCommandMode => self.enter_command_mode(""),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Cancel => self.show_help = false,
            Action::MoveDown => self.navigate_down(),
            Action::MoveUp => self.navigate_up(),
            Action::SwitchPane => self.pane = self.pane.other(),
            Action::PickUp => self.pick_up(),
            Action::Drop => {
                self.status_message = Some("Nothing picked up (press m on a bookmark)".to_string());
            }
            Action::NewFolder => self.enter_command_mode("folder "),
            Action::RemoveFolder => self.remove_folder_at_cursor(),
            Action::EditBookmark => {
                match self
                    .cursor_bookmark()
                    .map(|b| format!("edit {} | {}", b.title, b.url))
                {
                    Some(prefill) => self.enter_command_mode(&prefill),
                    None => self.status_message = Some("No bookmark under the cursor".to_string()),
                }
            }
            Action::Export => self.export(),
        }
        false
    }

    fn handle_move_key(&mut self, code: KeyCode) {
        match move_mode_action(code) {
            Some(Action::MoveDown) => self.navigate_down(),
            Some(Action::MoveUp) => self.navigate_up(),
            Some(Action::SwitchPane) => self.pane = self.pane.other(),
            Some(Action::ToggleHelp) => self.show_help = !self.show_help,
            Some(Action::Drop) => self.drop_held(),
            Some(Action::Cancel) => {
                self.held = None;
                self.mode = Mode::Normal;
                self.status_message = Some("Move cancelled".to_string());
            }
            _ => {}
        }
    }

    fn handle_command_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let should_quit = self.execute_command();
                self.mode = Mode::Normal;
                self.command_buffer.clear();
                if should_quit {
                    return true;
                }
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.command_buffer.push(c);
            }
            _ => {}
        }
        false
    }

    fn enter_command_mode(&mut self, prefill: &str) {
        self.mode = Mode::Command;
        self.command_buffer = prefill.to_string();
    }

    fn navigate_down(&mut self) {
        let len = self.pane_len(self.pane);
        let cursor = self.cursor_mut();
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    fn navigate_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    // ==================== Store commands ====================

    fn pick_up(&mut self) {
        match self.cursor_bookmark().map(|b| (b.id, b.title.clone())) {
            Some((id, title)) => {
                self.status_message = Some(format!(
                    "Moving '{}': pick a pane or folder and press Enter",
                    title
                ));
                self.held = Some(id);
                self.mode = Mode::Move;
            }
            None => self.status_message = Some("No bookmark under the cursor".to_string()),
        }
    }

    fn drop_held(&mut self) {
        let Some(id) = self.held else {
            self.mode = Mode::Normal;
            return;
        };

        let to = match self.pane {
            Pane::Unorganized => Destination::Unorganized,
            Pane::Folders => match self.cursor_folder() {
                Some(folder) => Destination::Folder(folder),
                None => {
                    self.status_message = Some("No folder here; create one with n".to_string());
                    return;
                }
            },
        };

        self.held = None;
        self.mode = Mode::Normal;
        let outcome = self.organizer.execute(Command::MoveBookmark { id, to });
        self.status_message = Some(
            match outcome {
                Outcome::Moved(MoveOutcome::Moved) => "Moved",
                Outcome::Moved(MoveOutcome::Dropped) => "Destination folder is gone; bookmark dropped",
                Outcome::Moved(MoveOutcome::Restored) => "Destination folder is gone; bookmark put back",
                _ => "Bookmark no longer exists",
            }
            .to_string(),
        );
        self.clamp_cursors();
    }

    fn create_folder(&mut self, name: &str) {
        self.status_message = Some(
            match self.organizer.execute(Command::CreateFolder {
                name: name.to_string(),
            }) {
                Outcome::FolderCreated(_) => format!("Folder '{}' created", name.trim()),
                _ => "Usage: :folder <name>".to_string(),
            },
        );
    }

    fn remove_folder_at_cursor(&mut self) {
        let Some(id) = self.cursor_folder() else {
            self.status_message = Some("No folder under the cursor".to_string());
            return;
        };
        if let Outcome::FolderRemoved { relocated } =
            self.organizer.execute(Command::RemoveFolder { id })
        {
            self.status_message = Some(format!(
                "Folder removed; {} bookmark(s) back in Unorganized",
                relocated
            ));
        }
        self.clamp_cursors();
    }

    fn edit_at_cursor(&mut self, args: &str) {
        // Titles may contain `|`, urls practically never do
        let Some((title, url)) = args.rsplit_once('|') else {
            self.status_message = Some("Usage: :edit <title> | <url>".to_string());
            return;
        };
        let Some(id) = self.cursor_bookmark().map(|b| b.id) else {
            self.status_message = Some("No bookmark under the cursor".to_string());
            return;
        };
        self.organizer.execute(Command::EditBookmark {
            id,
            title: title.to_string(),
            url: url.to_string(),
        });
        self.status_message = Some("Bookmark updated".to_string());
    }

    /// Replace the store with the bookmarks in `path`
    pub fn import_file(&mut self, path: &Path) {
        let html = match std::fs::read_to_string(path) {
            Ok(html) => html,
            Err(e) => {
                self.status_message = Some(format!("Could not read {}: {}", path.display(), e));
                return;
            }
        };
        if let Outcome::Imported(summary) = self.organizer.execute(Command::Import { html }) {
            self.status_message = Some(format!(
                "Imported {} bookmarks ({} discarded)",
                summary.imported, summary.discarded
            ));
        }
        self.held = None;
        self.pool_cursor = 0;
        self.folder_cursor = 0;
        self.pane = Pane::Unorganized;
    }

    fn export(&mut self) {
        let store = self.organizer.store();
        if !store.is_exportable() {
            self.status_message = Some("Nothing to export".to_string());
            return;
        }
        let options = self.organizer.config().export_options();
        let today = chrono::Local::now().date_naive();
        self.status_message = Some(match write_export(store, &options, &self.export_dir, today) {
            Ok(path) => format!("Exported to {}", path.display()),
            Err(e) => format!("Export failed: {}", e),
        });
    }

    fn execute_command(&mut self) -> bool {
        let input = self.command_buffer.trim().to_string();
        let (name, args) = match input.split_once(' ') {
            Some((name, args)) => (name, args.trim()),
            None => (input.as_str(), ""),
        };

        match name {
            "" => {}
            "q" | "quit" => return true,
            "folder" => self.create_folder(args),
            "rmdir" => self.remove_folder_at_cursor(),
            "edit" => self.edit_at_cursor(args),
            "export" => self.export(),
            "import" => {
                if args.is_empty() {
                    self.status_message = Some("Usage: :import <path>".to_string());
                } else {
                    self.import_file(Path::new(args));
                }
            }
            _ => {
                self.status_message = Some(format!("Unknown command: {}", name));
            }
        }
        false
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
