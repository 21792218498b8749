use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use super::keybindings::{Action, KeyBindings};
use crate::app::state::AppState;

pub enum InputResult {
    Continue,
    Quit,
    Action(Action),
    Char(char),
    Backspace,
}

pub fn handle_input(event: Event, state: &AppState, bindings: &KeyBindings) -> InputResult {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            handle_key(key_event, state, bindings)
        }
        _ => InputResult::Continue,
    }
}

fn handle_key(key: KeyEvent, state: &AppState, bindings: &KeyBindings) -> InputResult {
    // The compose drawer captures the keyboard while open
    if state.is_composing() {
        return handle_composer_input(key, bindings);
    }

    if state.modal.is_help() {
        return handle_help_input(key, bindings);
    }

    if state.modal.is_search() {
        return handle_search_input(key);
    }

    // Check for mapped action
    if let Some(action) = bindings.get(&key) {
        if action == Action::Quit {
            return InputResult::Quit;
        }
        return InputResult::Action(action);
    }

    InputResult::Continue
}

fn handle_help_input(key: KeyEvent, bindings: &KeyBindings) -> InputResult {
    // In help modal: j/k scroll, Esc or "." closes
    if let Some(action) = bindings.get(&key) {
        match action {
            Action::Help | Action::Up | Action::Down => return InputResult::Action(action),
            Action::Quit => return InputResult::Quit,
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('.') => InputResult::Action(Action::Help),
        KeyCode::Up | KeyCode::Char('k') => InputResult::Action(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => InputResult::Action(Action::Down),
        _ => InputResult::Continue,
    }
}

fn handle_composer_input(key: KeyEvent, bindings: &KeyBindings) -> InputResult {
    // Check for control actions first
    if let Some(action) = bindings.get(&key) {
        match action {
            Action::Send
            | Action::SaveDraft
            | Action::Cancel
            | Action::NextField
            | Action::PrevField => {
                return InputResult::Action(action);
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char(c) => InputResult::Char(c),
        KeyCode::Backspace => InputResult::Backspace,
        KeyCode::Enter => InputResult::Char('\n'),
        KeyCode::Tab => InputResult::Action(Action::NextField),
        KeyCode::Esc => InputResult::Action(Action::Cancel),
        _ => InputResult::Continue,
    }
}

fn handle_search_input(key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Char(c) => InputResult::Char(c),
        KeyCode::Backspace => InputResult::Backspace,
        KeyCode::Enter | KeyCode::Esc => InputResult::Action(Action::Back), // Exit search mode
        _ => InputResult::Continue,
    }
}
