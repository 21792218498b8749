//! Compose drawer lifecycle

use super::super::App;
use super::super::state::ModalState;

impl App {
    pub(crate) fn open_compose(&mut self) {
        self.state.modal = ModalState::None;
        self.state.mailbox.open_compose();
    }

    pub(crate) fn cancel_compose(&mut self) {
        self.state.mailbox.close_compose();
        self.state.set_status("Draft discarded");
    }

    pub(crate) fn composer_next_field(&mut self) {
        if let Some(composer) = self.state.mailbox.composer_mut() {
            composer.next_field();
        }
    }

    pub(crate) fn composer_prev_field(&mut self) {
        if let Some(composer) = self.state.mailbox.composer_mut() {
            composer.prev_field();
        }
    }

    /// Send (`send = true`) or save the open form. A rejection keeps the
    /// drawer open with the form intact.
    pub(crate) fn submit_compose(&mut self, send: bool) {
        match self.state.mailbox.submit_compose(send) {
            Some(Ok(_)) => {
                self.state.detail_scroll = 0;
                self.state
                    .set_status(if send { "Message sent" } else { "Draft saved" });
            }
            Some(Err(e)) => self.state.set_error(e),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample_app;
    use crate::input::Action;
    use crate::mail::Folder;
    use crate::mailbox::ComposerField;

    #[test]
    fn test_send_without_recipient_keeps_drawer() {
        let mut app = sample_app();
        app.handle_action(Action::Compose);
        app.handle_action(Action::NextField);
        for c in "hi".chars() {
            app.handle_char(c);
        }
        let before = app.state.mailbox.store().len();

        app.handle_action(Action::Send);

        assert_eq!(
            app.state.status.error.as_deref(),
            Some("Recipient is required to send")
        );
        assert_eq!(app.state.mailbox.store().len(), before);
        let composer = app.state.mailbox.composer().unwrap();
        assert_eq!(composer.subject, "hi");
        assert_eq!(composer.field, ComposerField::Subject);
    }

    #[test]
    fn test_save_draft_selects_new_message() {
        let mut app = sample_app();
        app.handle_action(Action::Compose);
        for c in "a@b.com".chars() {
            app.handle_char(c);
        }
        app.handle_action(Action::SaveDraft);

        assert!(!app.state.is_composing());
        assert_eq!(app.state.status.message, "Draft saved");
        assert_eq!(app.state.mailbox.selection().folder, Folder::Drafts);
        let selected = app.state.mailbox.selected_message().unwrap();
        assert_eq!(selected.subject, "(No subject)");
        assert_eq!(selected.preview, "Empty message");
        assert_eq!(selected.tags, ["outbound"]);
    }

    #[test]
    fn test_send_files_under_sent() {
        let mut app = sample_app();
        app.handle_action(Action::Compose);
        for c in "bob@x.io\tLunch\tSee you at noon\tsocial, food".chars() {
            if c == '\t' {
                app.handle_action(Action::NextField);
            } else {
                app.handle_char(c);
            }
        }
        app.handle_action(Action::Send);

        assert_eq!(app.state.status.message, "Message sent");
        let sent = app.state.mailbox.selected_message().unwrap();
        assert_eq!(sent.folder, Folder::Sent);
        assert_eq!(sent.subject, "Lunch");
        assert_eq!(sent.preview, "See you at noon");
        assert_eq!(sent.tags, ["social", "food"]);
    }

    #[test]
    fn test_cancel_discards_form() {
        let mut app = sample_app();
        app.handle_action(Action::Compose);
        app.handle_char('x');
        app.handle_action(Action::Cancel);
        assert!(!app.state.is_composing());

        app.handle_action(Action::Compose);
        assert!(app.state.mailbox.composer().unwrap().to.is_empty());
    }

    #[test]
    fn test_prev_field_wraps() {
        let mut app = sample_app();
        app.handle_action(Action::Compose);
        app.handle_action(Action::PrevField);
        assert_eq!(
            app.state.mailbox.composer().unwrap().field,
            ComposerField::Tags
        );
    }
}
