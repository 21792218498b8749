//! Navigation actions (selection movement, folder switching)

use crate::constants::DETAIL_SCROLL_STEP;
use crate::mail::Folder;

use super::super::App;

impl App {
    /// Move the selection through the visible list. Landing on a message
    /// selects it, which marks it read.
    pub(crate) fn move_selection(&mut self, delta: isize) {
        if let Some(id) = self.state.neighbor_id(delta) {
            self.select(&id);
        }
    }

    pub(crate) fn move_to_top(&mut self) {
        if let Some(id) = self.state.first_id() {
            self.select(&id);
        }
    }

    pub(crate) fn move_to_bottom(&mut self) {
        if let Some(id) = self.state.last_id() {
            self.select(&id);
        }
    }

    pub(crate) fn switch_folder(&mut self, folder: Folder) {
        self.state.mailbox.select_folder(folder);
        self.state.detail_scroll = 0;
        let counts = self.state.mailbox.folder_counts();
        self.state.set_status(format!(
            "{}: {} unread",
            folder.label(),
            counts.unread(folder)
        ));
    }

    /// Scroll the open message by whole steps; stops at the top
    pub(crate) fn scroll_detail(&mut self, direction: i16) {
        if self.state.selected_id().is_none() {
            return;
        }
        self.state.detail_scroll = if direction < 0 {
            self.state.detail_scroll.saturating_sub(DETAIL_SCROLL_STEP)
        } else {
            self.state.detail_scroll.saturating_add(DETAIL_SCROLL_STEP)
        };
    }

    fn select(&mut self, id: &str) {
        if self.state.mailbox.selection().message_id.as_deref() != Some(id) {
            self.state.detail_scroll = 0;
        }
        self.state.mailbox.select_message(id);
    }

    /// Re-select the resolved message, making the fallback selection explicit
    pub(crate) fn open_selected(&mut self) {
        match self.state.selected_id() {
            Some(id) => self.select(&id),
            None => self.state.set_status("Nothing to open"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample_app;
    use crate::constants::DETAIL_SCROLL_STEP;
    use crate::input::Action;
    use crate::mail::Folder;

    #[test]
    fn test_down_selects_next_and_marks_read() {
        let mut app = sample_app();
        let list: Vec<String> = app
            .state
            .mailbox
            .visible_messages()
            .iter()
            .map(|m| m.id.clone())
            .collect();
        app.handle_action(Action::Top);
        app.handle_action(Action::Down);

        let selected = app.state.mailbox.selected_message().unwrap();
        assert_eq!(selected.id, list[1]);
        assert!(!selected.unread);
    }

    #[test]
    fn test_bottom_then_down_stays() {
        let mut app = sample_app();
        app.handle_action(Action::Bottom);
        let last = app.state.selected_id();
        app.handle_action(Action::Down);
        assert_eq!(app.state.selected_id(), last);
    }

    #[test]
    fn test_open_makes_selection_explicit() {
        let mut app = sample_app();
        // Moving the shown message away leaves only the fallback
        app.state.mailbox.move_to_folder("msg-001", Folder::Trash);
        assert!(app.state.mailbox.selection().message_id.is_none());
        assert!(app.state.mailbox.store().get("msg-002").unwrap().unread);

        app.handle_action(Action::Open);

        assert_eq!(
            app.state.mailbox.selection().message_id.as_deref(),
            Some("msg-002")
        );
        assert!(!app.state.mailbox.store().get("msg-002").unwrap().unread);
    }

    #[test]
    fn test_detail_scroll_steps_and_resets_on_selection_change() {
        let mut app = sample_app();
        app.handle_action(Action::ScrollDetailDown);
        app.handle_action(Action::ScrollDetailDown);
        assert_eq!(app.state.detail_scroll, 2 * DETAIL_SCROLL_STEP);

        app.handle_action(Action::ScrollDetailUp);
        app.handle_action(Action::ScrollDetailUp);
        app.handle_action(Action::ScrollDetailUp);
        assert_eq!(app.state.detail_scroll, 0);

        app.handle_action(Action::ScrollDetailDown);
        app.handle_action(Action::Down);
        assert_eq!(app.state.detail_scroll, 0);
    }

    #[test]
    fn test_detail_scroll_ignored_without_message() {
        let mut app = sample_app();
        app.state.mailbox.move_to_folder("msg-011", Folder::Trash);
        app.handle_action(Action::JumpFolder(Folder::Spam));
        app.handle_action(Action::ScrollDetailDown);
        assert_eq!(app.state.detail_scroll, 0);
    }

    #[test]
    fn test_open_in_empty_folder() {
        let mut app = sample_app();
        app.state.mailbox.move_to_folder("msg-011", Folder::Trash);
        app.handle_action(Action::JumpFolder(Folder::Spam));
        app.handle_action(Action::Open);
        assert_eq!(app.state.status.message, "Nothing to open");
    }
}
