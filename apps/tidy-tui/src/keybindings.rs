//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Enter command mode
    EnterCommandMode,
    /// Cancel/escape to normal mode
    Cancel,
    /// Move up in list
    MoveUp,
    /// Move down in list
    MoveDown,
    /// Switch between the unorganized and folders panes
    SwitchPane,
    /// Pick up the bookmark under the cursor
    PickUp,
    /// Drop the held bookmark onto the pane or folder under the cursor
    Drop,
    /// Start a new folder (prefills `:folder `)
    NewFolder,
    /// Remove the folder under the cursor
    RemoveFolder,
    /// Edit the bookmark under the cursor (prefills `:edit `)
    EditBookmark,
    /// Write the export file
    Export,
    /// Toggle help
    ToggleHelp,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(':') => Some(Action::EnterCommandMode),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Tab => Some(Action::SwitchPane),
        KeyCode::Char('m') => Some(Action::PickUp),
        KeyCode::Char('n') => Some(Action::NewFolder),
        KeyCode::Char('d') => Some(Action::RemoveFolder),
        KeyCode::Char('e') => Some(Action::EditBookmark),
        KeyCode::Char('x') => Some(Action::Export),
        KeyCode::Enter => Some(Action::Drop),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

/// Get the action for a key while a bookmark is held. Only navigation,
/// drop and cancel are available.
pub fn move_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Tab => Some(Action::SwitchPane),
        KeyCode::Enter => Some(Action::Drop),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}
