//! Text input handling (chars, backspace)

use super::super::App;

impl App {
    pub(crate) fn handle_char(&mut self, c: char) {
        // Handle composer input
        if let Some(composer) = self.state.mailbox.composer_mut() {
            composer.push_char(c);
            return;
        }

        // Handle search input
        if self.state.modal.is_search() {
            let mut term = self.state.mailbox.selection().search_term.clone();
            term.push(c);
            self.state.mailbox.set_search_term(term);
            self.state.detail_scroll = 0;
        }
    }

    pub(crate) fn handle_backspace(&mut self) {
        if let Some(composer) = self.state.mailbox.composer_mut() {
            composer.backspace();
            return;
        }

        if self.state.modal.is_search() {
            let mut term = self.state.mailbox.selection().search_term.clone();
            term.pop();
            self.state.mailbox.set_search_term(term);
            self.state.detail_scroll = 0;
        }
    }
}
