//! Message operations on the resolved selection (star, read, move)

use crate::mail::Folder;

use super::super::App;

impl App {
    pub(crate) fn toggle_star(&mut self) {
        let Some(id) = self.state.selected_id() else {
            self.state.set_error("No message selected");
            return;
        };

        let before = self.state.mailbox.store().get(&id).map(|m| m.folder);
        self.state.mailbox.toggle_star(&id);

        if let Some(message) = self.state.mailbox.store().get(&id) {
            let verb = if message.starred { "Starred" } else { "Unstarred" };
            let status = if before == Some(message.folder) {
                verb.to_string()
            } else {
                format!("{} (moved to {})", verb, message.folder.label())
            };
            self.state.set_status(status);
        }
    }

    pub(crate) fn toggle_read(&mut self) {
        let Some(id) = self.state.selected_id() else {
            self.state.set_error("No message selected");
            return;
        };

        self.state.mailbox.toggle_read(&id);

        let unread = self
            .state
            .mailbox
            .store()
            .get(&id)
            .is_some_and(|m| m.unread);
        self.state
            .set_status(if unread { "Marked unread" } else { "Marked read" });
    }

    pub(crate) fn move_selected(&mut self, target: Folder) {
        let Some(id) = self.state.selected_id() else {
            self.state.set_error("No message selected");
            return;
        };

        let already_there = self.state.mailbox.store().get(&id).map(|m| m.folder) == Some(target);

        // Same-folder moves still drop the explicit selection
        self.state.mailbox.move_to_folder(&id, target);
        self.state.detail_scroll = 0;
        self.state.set_status(if already_there {
            format!("Already in {}", target.label())
        } else {
            format!("Moved to {}", target.label())
        });
    }
}
