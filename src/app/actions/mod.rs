//! Action handlers for user input
//!
//! - `navigation`: moving the selection and switching folders
//! - `message`: star, read and folder moves on the selected message
//! - `compose`: the compose drawer lifecycle
//! - `input`: text input for search and the composer

mod compose;
mod input;
mod message;
mod navigation;

use crate::input::Action;

use super::App;
use super::state::ModalState;

impl App {
    pub(crate) fn handle_action(&mut self, action: Action) {
        match action {
            // Navigation
            Action::Up => {
                if self.state.modal.is_help() {
                    self.help_scroll(-1);
                } else {
                    self.move_selection(-1);
                }
            }
            Action::Down => {
                if self.state.modal.is_help() {
                    self.help_scroll(1);
                } else {
                    self.move_selection(1);
                }
            }
            Action::Top => self.move_to_top(),
            Action::Bottom => self.move_to_bottom(),
            Action::ScrollDetailDown => self.scroll_detail(1),
            Action::ScrollDetailUp => self.scroll_detail(-1),

            // Folders
            Action::NextFolder => self.switch_folder(self.state.mailbox.selection().folder.next()),
            Action::PrevFolder => self.switch_folder(self.state.mailbox.selection().folder.prev()),
            Action::JumpFolder(folder) => self.switch_folder(folder),

            // Message actions
            Action::Open => self.open_selected(),
            Action::Back => self.go_back(),
            Action::Quit => {} // Handled in event loop
            Action::ToggleRead => self.toggle_read(),
            Action::ToggleStar => self.toggle_star(),
            Action::MoveTo(folder) => self.move_selected(folder),

            // Search
            Action::Search => {
                if !self.state.modal.is_active() {
                    self.state.modal = ModalState::Search;
                }
            }

            // Composer
            Action::Compose => self.open_compose(),
            Action::NextField => self.composer_next_field(),
            Action::PrevField => self.composer_prev_field(),
            Action::Send => self.submit_compose(true),
            Action::SaveDraft => self.submit_compose(false),
            Action::Cancel => self.cancel_compose(),

            // Help
            Action::Help => self.toggle_help(),
        }
    }

    fn toggle_help(&mut self) {
        if self.state.modal.is_help() {
            self.state.modal = ModalState::None;
        } else {
            self.state.modal = ModalState::Help {
                keybindings: self.bindings.all_bindings(),
                scroll: 0,
            };
        }
    }

    fn help_scroll(&mut self, delta: isize) {
        if let ModalState::Help {
            keybindings,
            scroll,
        } = &mut self.state.modal
        {
            let max = keybindings.len().saturating_sub(1);
            *scroll = scroll.saturating_add_signed(delta).min(max);
        }
    }

    /// Esc outside any overlay: close search, then clear the term
    fn go_back(&mut self) {
        if self.state.modal.is_active() {
            self.state.modal = ModalState::None;
            return;
        }
        if !self.state.mailbox.selection().search_term.is_empty() {
            self.state.mailbox.set_search_term("");
            self.state.set_status("Search cleared");
        }
    }
}
