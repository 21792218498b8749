use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::config::KeybindingMode;
use crate::mail::Folder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Top,
    Bottom,
    ScrollDetailDown,
    ScrollDetailUp,

    // Folders
    NextFolder,
    PrevFolder,
    JumpFolder(Folder),

    // Actions
    Open,
    Back,
    Quit,
    Compose,
    ToggleRead,
    ToggleStar,
    MoveTo(Folder),
    Search,

    // Composer
    NextField,
    PrevField,
    Send,
    SaveDraft,
    Cancel,

    // Help
    Help,
}

pub struct KeyBindings {
    bindings: HashMap<KeyEvent, Action>,
}

/// A displayable keybinding entry
#[derive(Debug, Clone)]
pub struct KeybindingEntry {
    pub key: String,
    pub description: String,
    pub category: &'static str,
}

impl KeyBindings {
    pub fn new(mode: &KeybindingMode) -> Self {
        let mut bindings = match mode {
            KeybindingMode::Vim => Self::vim_bindings(),
            KeybindingMode::Arrows => Self::arrow_bindings(),
        };
        // Digits jump straight to a folder in both modes
        for (n, folder) in ('1'..='7').zip(Folder::ALL) {
            bindings.insert(key(n), Action::JumpFolder(folder));
        }
        Self { bindings }
    }

    pub fn get(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings.get(event).copied()
    }

    /// Get all keybindings as displayable entries grouped by category
    pub fn all_bindings(&self) -> Vec<KeybindingEntry> {
        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|(event, action)| KeybindingEntry {
                key: format_key_event(event),
                description: action_description(action),
                category: action_category(action),
            })
            .collect();

        entries.sort_by(|a, b| {
            category_order(a.category)
                .cmp(&category_order(b.category))
                .then_with(|| a.description.cmp(&b.description))
                .then_with(|| a.key.cmp(&b.key))
        });
        entries
    }

    fn vim_bindings() -> HashMap<KeyEvent, Action> {
        let mut map = HashMap::new();

        // Navigation
        map.insert(key('j'), Action::Down);
        map.insert(key('k'), Action::Up);
        map.insert(key('g'), Action::Top);
        map.insert(shift_key('G'), Action::Bottom);
        map.insert(key_code(KeyCode::Down), Action::Down);
        map.insert(key_code(KeyCode::Up), Action::Up);
        map.insert(shift_key('J'), Action::ScrollDetailDown);
        map.insert(shift_key('K'), Action::ScrollDetailUp);
        map.insert(key_code(KeyCode::PageDown), Action::ScrollDetailDown);
        map.insert(key_code(KeyCode::PageUp), Action::ScrollDetailUp);

        // Folders
        map.insert(key(']'), Action::NextFolder);
        map.insert(key('['), Action::PrevFolder);
        map.insert(key('l'), Action::NextFolder);
        map.insert(key('h'), Action::PrevFolder);

        // Actions
        map.insert(key_code(KeyCode::Enter), Action::Open);
        map.insert(key('q'), Action::Quit);
        map.insert(key_code(KeyCode::Esc), Action::Back);
        map.insert(key('c'), Action::Compose);
        map.insert(key('m'), Action::ToggleRead);
        map.insert(key('s'), Action::ToggleStar);
        map.insert(key('e'), Action::MoveTo(Folder::Archive));
        map.insert(key('!'), Action::MoveTo(Folder::Spam));
        map.insert(key('d'), Action::MoveTo(Folder::Trash));
        map.insert(key('/'), Action::Search);

        // Composer (Tab→NextField handled in handler.rs for composer context only)
        map.insert(shift_key_code(KeyCode::BackTab), Action::PrevField);
        map.insert(ctrl_key('s'), Action::Send);
        map.insert(ctrl_key('d'), Action::SaveDraft);

        // Help
        map.insert(key('.'), Action::Help);

        map
    }

    fn arrow_bindings() -> HashMap<KeyEvent, Action> {
        let mut map = HashMap::new();

        // Navigation
        map.insert(key_code(KeyCode::Down), Action::Down);
        map.insert(key_code(KeyCode::Up), Action::Up);
        map.insert(key_code(KeyCode::Home), Action::Top);
        map.insert(key_code(KeyCode::End), Action::Bottom);
        map.insert(key_code(KeyCode::PageDown), Action::ScrollDetailDown);
        map.insert(key_code(KeyCode::PageUp), Action::ScrollDetailUp);

        // Folders
        map.insert(key_code(KeyCode::Right), Action::NextFolder);
        map.insert(key_code(KeyCode::Left), Action::PrevFolder);

        // Actions
        map.insert(key_code(KeyCode::Enter), Action::Open);
        map.insert(key_code(KeyCode::Esc), Action::Back);
        map.insert(key_code(KeyCode::Backspace), Action::Back);
        map.insert(ctrl_key('q'), Action::Quit);
        map.insert(ctrl_key('n'), Action::Compose);
        map.insert(ctrl_key('u'), Action::ToggleRead);
        map.insert(key('*'), Action::ToggleStar);
        map.insert(key_code(KeyCode::F(6)), Action::ToggleStar);
        map.insert(ctrl_key('e'), Action::MoveTo(Folder::Archive));
        map.insert(key_code(KeyCode::F(9)), Action::MoveTo(Folder::Spam));
        map.insert(key_code(KeyCode::Delete), Action::MoveTo(Folder::Trash));
        map.insert(key_code(KeyCode::F(3)), Action::Search);
        map.insert(key('/'), Action::Search);

        // Composer (Tab→NextField handled in handler.rs for composer context only)
        map.insert(shift_key_code(KeyCode::BackTab), Action::PrevField);
        map.insert(ctrl_key('s'), Action::Send);
        map.insert(ctrl_key('d'), Action::SaveDraft);
        map.insert(ctrl_key('c'), Action::Cancel);

        // Help
        map.insert(key('.'), Action::Help);
        map.insert(key_code(KeyCode::F(1)), Action::Help);

        map
    }
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn shift_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
}

fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn shift_key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::SHIFT)
}

/// Format a KeyEvent for display
fn format_key_event(event: &KeyEvent) -> String {
    let mut parts = Vec::new();

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl+");
    }
    // BackTab already reads as Shift+Tab
    if event.modifiers.contains(KeyModifiers::SHIFT) && event.code != KeyCode::BackTab {
        parts.push("Shift+");
    }

    let key_str = match event.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => format!("{:?}", event.code),
    };

    format!("{}{}", parts.join(""), key_str)
}

/// Get a human-readable description for an action
fn action_description(action: &Action) -> String {
    match action {
        Action::Up => "Move up".to_string(),
        Action::Down => "Move down".to_string(),
        Action::Top => "Go to newest".to_string(),
        Action::Bottom => "Go to oldest".to_string(),
        Action::ScrollDetailDown => "Scroll message down".to_string(),
        Action::ScrollDetailUp => "Scroll message up".to_string(),
        Action::NextFolder => "Next folder".to_string(),
        Action::PrevFolder => "Previous folder".to_string(),
        Action::JumpFolder(folder) => format!("Open {}", folder.label()),
        Action::Open => "Open message".to_string(),
        Action::Back => "Go back / clear search".to_string(),
        Action::Quit => "Quit".to_string(),
        Action::Compose => "Compose new message".to_string(),
        Action::ToggleRead => "Toggle read/unread".to_string(),
        Action::ToggleStar => "Toggle star".to_string(),
        Action::MoveTo(folder) => format!("Move to {}", folder.label()),
        Action::Search => "Search messages".to_string(),
        Action::NextField => "Next field".to_string(),
        Action::PrevField => "Previous field".to_string(),
        Action::Send => "Send".to_string(),
        Action::SaveDraft => "Save as draft".to_string(),
        Action::Cancel => "Discard draft".to_string(),
        Action::Help => "Toggle help".to_string(),
    }
}

/// Get the category for an action
fn action_category(action: &Action) -> &'static str {
    match action {
        Action::Up
        | Action::Down
        | Action::Top
        | Action::Bottom
        | Action::ScrollDetailDown
        | Action::ScrollDetailUp => "Navigation",

        Action::NextFolder | Action::PrevFolder | Action::JumpFolder(_) => "Folders",

        Action::Open
        | Action::Back
        | Action::Quit
        | Action::Compose
        | Action::ToggleRead
        | Action::ToggleStar
        | Action::MoveTo(_)
        | Action::Search => "Actions",

        Action::NextField
        | Action::PrevField
        | Action::Send
        | Action::SaveDraft
        | Action::Cancel => "Composer",

        Action::Help => "Help",
    }
}

/// Get sort order for categories
fn category_order(category: &str) -> u8 {
    match category {
        "Navigation" => 0,
        "Folders" => 1,
        "Actions" => 2,
        "Composer" => 3,
        "Help" => 4,
        _ => 99,
    }
}
