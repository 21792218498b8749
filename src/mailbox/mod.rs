//! Mailbox state core.
//!
//! `Mailbox` owns the message store, the selection state and the compose
//! surface. Views are derived on every read; all writes go through the
//! methods below and run to completion synchronously.

pub mod draft;
pub mod format;
pub mod star;
pub mod store;
pub mod view;

use chrono::{DateTime, Utc};

use crate::config::IdentityConfig;
use crate::constants::{EMPTY_PREVIEW, NO_SUBJECT, PREVIEW_LENGTH};
use crate::error::ValidationError;
use crate::mail::{Folder, Message};

pub use draft::{ComposerField, Draft, DraftComposer};
pub use store::MessageStore;
pub use view::{DayGroup, FolderCounts};

/// Which folder is open, which message is selected, what is being searched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub folder: Folder,
    /// Explicit selection. May point at a message no longer visible.
    pub message_id: Option<String>,
    pub search_term: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ComposeState {
    #[default]
    Closed,
    Open(DraftComposer),
}

impl ComposeState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[derive(Debug, Clone)]
pub struct Mailbox {
    store: MessageStore,
    selection: Selection,
    compose: ComposeState,
    identity: IdentityConfig,
}

impl Mailbox {
    /// Seed the mailbox. The inbox is open with no explicit selection, so
    /// the newest visible inbox message is shown.
    pub fn new(messages: Vec<Message>, identity: IdentityConfig) -> Self {
        let store = MessageStore::new(messages);
        tracing::info!("Mailbox seeded with {} messages", store.len());
        Self {
            store,
            selection: Selection::default(),
            compose: ComposeState::Closed,
            identity,
        }
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn compose(&self) -> &ComposeState {
        &self.compose
    }

    pub fn identity(&self) -> &IdentityConfig {
        &self.identity
    }

    // --- Derived views ---

    pub fn folder_counts(&self) -> FolderCounts {
        view::folder_counts(self.store.messages())
    }

    /// Active folder filtered by the search term, newest first
    pub fn visible_messages(&self) -> Vec<&Message> {
        view::filter_messages(
            &self.store,
            self.selection.folder,
            &self.selection.search_term,
        )
    }

    pub fn day_groups(&self) -> Vec<DayGroup<'_>> {
        view::group_by_day(&self.visible_messages())
    }

    pub fn selected_message(&self) -> Option<&Message> {
        view::resolve_selection(
            &self.visible_messages(),
            self.selection.message_id.as_deref(),
        )
    }

    // --- Selection ---

    pub fn select_folder(&mut self, folder: Folder) {
        self.selection.folder = folder;
        self.selection.search_term.clear();
        self.selection.message_id = self.store.first_in_folder(folder).map(|m| m.id.clone());
        tracing::debug!(
            "Selected folder {} (message {:?})",
            folder,
            self.selection.message_id
        );
    }

    /// Select a message and mark it read. Works even when the message is
    /// hidden by the current folder or search.
    pub fn select_message(&mut self, id: &str) {
        self.selection.message_id = Some(id.to_string());
        let marked = self.store.update(id, |m| m.unread = false);
        tracing::debug!("Selected message {} (found: {})", id, marked);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.selection.search_term = term.into();
    }

    // --- Mutations ---

    pub fn toggle_star(&mut self, id: &str) {
        if !self.store.update(id, star::apply_star_toggle) {
            tracing::debug!("Star toggle ignored, no message {}", id);
            return;
        }
        if let Some(m) = self.store.get(id) {
            tracing::debug!("Toggled star on {}: starred={} folder={}", id, m.starred, m.folder);
        }
    }

    pub fn toggle_read(&mut self, id: &str) {
        if !self.store.update(id, |m| m.unread = !m.unread) {
            tracing::debug!("Read toggle ignored, no message {}", id);
        }
    }

    /// Move a message to `target`. Moving the selected message clears the selection.
    pub fn move_to_folder(&mut self, id: &str, target: Folder) {
        if !self.store.update(id, |m| m.folder = target) {
            tracing::debug!("Move ignored, no message {}", id);
            return;
        }
        if self.selection.message_id.as_deref() == Some(id) {
            self.selection.message_id = None;
        }
        tracing::debug!("Moved {} to {}", id, target);
    }

    // --- Compose surface ---

    /// Open the drawer with an empty form. Reopening keeps the current form.
    pub fn open_compose(&mut self) {
        if !self.compose.is_open() {
            self.compose = ComposeState::Open(DraftComposer::default());
        }
    }

    /// Close the drawer, discarding the form
    pub fn close_compose(&mut self) {
        self.compose = ComposeState::Closed;
    }

    pub fn composer(&self) -> Option<&DraftComposer> {
        match &self.compose {
            ComposeState::Open(composer) => Some(composer),
            ComposeState::Closed => None,
        }
    }

    pub fn composer_mut(&mut self) -> Option<&mut DraftComposer> {
        match &mut self.compose {
            ComposeState::Open(composer) => Some(composer),
            ComposeState::Closed => None,
        }
    }

    /// Submit the open form. Returns None when the drawer is closed.
    pub fn submit_compose(&mut self, send: bool) -> Option<Result<String, ValidationError>> {
        let draft = self.composer()?.to_draft(send);
        Some(self.submit_draft(draft))
    }

    pub fn submit_draft(&mut self, draft: Draft) -> Result<String, ValidationError> {
        self.submit_draft_at(draft, Utc::now())
    }

    /// Store a draft as a new message and select it. Returns the new id.
    pub fn submit_draft_at(
        &mut self,
        draft: Draft,
        now: DateTime<Utc>,
    ) -> Result<String, ValidationError> {
        if draft.send && draft.to.is_empty() {
            tracing::warn!("Rejected send without recipient");
            return Err(ValidationError::MissingRecipient);
        }

        let id = self.store.fresh_id(now);
        let folder = if draft.send {
            Folder::Sent
        } else {
            Folder::Drafts
        };
        let tags = draft.effective_tags();
        let preview: String = draft.body.chars().take(PREVIEW_LENGTH).collect();

        let message = Message {
            id: id.clone(),
            folder,
            sender_name: self.identity.name.clone(),
            sender_email: self.identity.email.clone(),
            recipient_email: if draft.to.is_empty() {
                self.identity.draft_address.clone()
            } else {
                draft.to
            },
            subject: if draft.subject.is_empty() {
                NO_SUBJECT.to_string()
            } else {
                draft.subject
            },
            preview: if preview.is_empty() {
                EMPTY_PREVIEW.to_string()
            } else {
                preview
            },
            body: draft.body,
            timestamp: now,
            unread: false,
            starred: false,
            tags,
            attachments: Vec::new(),
        };

        self.store.insert_front(message);
        self.selection.folder = folder;
        self.selection.message_id = Some(id.clone());
        self.compose = ComposeState::Closed;
        tracing::debug!("Stored {} in {}", id, folder);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap()
    }

    fn make_message(id: &str, folder: Folder, age: Duration) -> Message {
        Message {
            id: id.to_string(),
            folder,
            sender_name: "Tester".to_string(),
            sender_email: "test@example.com".to_string(),
            recipient_email: "you@mailbox.app".to_string(),
            subject: format!("Subject {id}"),
            preview: format!("Preview {id}"),
            body: "Body".to_string(),
            timestamp: now() - age,
            unread: true,
            starred: false,
            tags: Vec::new(),
            attachments: Vec::new(),
        }
    }

    fn sample() -> Mailbox {
        let mut starred = make_message("s1", Folder::Starred, Duration::hours(5));
        starred.starred = true;
        Mailbox::new(
            vec![
                make_message("i1", Folder::Inbox, Duration::days(3)),
                make_message("i2", Folder::Inbox, Duration::hours(1)),
                make_message("i3", Folder::Inbox, Duration::minutes(10)),
                starred,
                make_message("a1", Folder::Archive, Duration::days(1)),
            ],
            IdentityConfig::default(),
        )
    }

    fn draft(to: &str, subject: &str, body: &str, send: bool) -> Draft {
        Draft {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            tags: Vec::new(),
            send,
        }
    }

    fn visible_ids(mailbox: &Mailbox) -> Vec<String> {
        mailbox
            .visible_messages()
            .iter()
            .map(|m| m.id.clone())
            .collect()
    }

    #[test]
    fn test_new_resolves_to_newest_inbox_message() {
        let mailbox = sample();
        assert_eq!(mailbox.selection().folder, Folder::Inbox);
        assert!(mailbox.selection().message_id.is_none());
        // Store order is oldest first; the newest one is shown
        assert_eq!(mailbox.selected_message().unwrap().id, "i3");
        assert!(!mailbox.compose().is_open());
    }

    #[test]
    fn test_new_ignores_store_order_for_initial_selection() {
        let messages = vec![
            make_message("old", Folder::Inbox, Duration::days(2)),
            make_message("new", Folder::Inbox, Duration::minutes(5)),
        ];
        let mut reversed = messages.clone();
        reversed.reverse();

        for seed in [messages, reversed] {
            let mailbox = Mailbox::new(seed, IdentityConfig::default());
            assert_eq!(mailbox.selected_message().unwrap().id, "new");
            assert!(mailbox.store().get("new").unwrap().unread);
        }
    }

    #[test]
    fn test_inbox_sorted_newest_first() {
        assert_eq!(visible_ids(&sample()), ["i3", "i2", "i1"]);
    }

    #[test]
    fn test_select_folder_resets_search_and_selection() {
        let mut mailbox = sample();
        mailbox.set_search_term("anything");
        mailbox.select_folder(Folder::Archive);

        assert_eq!(mailbox.selection().folder, Folder::Archive);
        assert_eq!(mailbox.selection().search_term, "");
        assert_eq!(mailbox.selection().message_id.as_deref(), Some("a1"));

        mailbox.select_folder(Folder::Spam);
        assert!(mailbox.selection().message_id.is_none());
        assert!(mailbox.selected_message().is_none());
    }

    #[test]
    fn test_select_message_marks_read() {
        let mut mailbox = sample();
        mailbox.select_message("i2");
        assert_eq!(mailbox.selected_message().unwrap().id, "i2");
        assert!(!mailbox.store().get("i2").unwrap().unread);
    }

    #[test]
    fn test_select_hidden_message_still_marks_read() {
        let mut mailbox = sample();
        mailbox.select_message("a1");
        assert!(!mailbox.store().get("a1").unwrap().unread);
        // Not visible in the inbox, so resolution falls back to the newest
        assert_eq!(mailbox.selected_message().unwrap().id, "i3");
    }

    #[test]
    fn test_double_star_toggle_round_trips_from_inbox() {
        let mut mailbox = sample();
        mailbox.toggle_star("i1");
        let m = mailbox.store().get("i1").unwrap();
        assert!(m.starred);
        assert_eq!(m.folder, Folder::Starred);

        mailbox.toggle_star("i1");
        let m = mailbox.store().get("i1").unwrap();
        assert!(!m.starred);
        assert_eq!(m.folder, Folder::Inbox);
    }

    #[test]
    fn test_double_star_toggle_round_trips_from_starred() {
        let mut mailbox = sample();
        mailbox.toggle_star("s1");
        assert_eq!(mailbox.store().get("s1").unwrap().folder, Folder::Inbox);
        mailbox.toggle_star("s1");
        let m = mailbox.store().get("s1").unwrap();
        assert!(m.starred);
        assert_eq!(m.folder, Folder::Starred);
    }

    #[test]
    fn test_unstar_outside_starred_folder_keeps_folder() {
        let mut mailbox = sample();
        mailbox.toggle_star("s1");
        mailbox.toggle_star("s1");
        mailbox.move_to_folder("s1", Folder::Archive);
        mailbox.toggle_star("s1");
        let m = mailbox.store().get("s1").unwrap();
        assert!(!m.starred);
        assert_eq!(m.folder, Folder::Archive);
    }

    #[test]
    fn test_toggle_read() {
        let mut mailbox = sample();
        mailbox.toggle_read("i1");
        assert!(!mailbox.store().get("i1").unwrap().unread);
        mailbox.toggle_read("i1");
        assert!(mailbox.store().get("i1").unwrap().unread);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut mailbox = sample();
        let before = mailbox.store().messages().to_vec();
        mailbox.toggle_star("nope");
        mailbox.toggle_read("nope");
        mailbox.move_to_folder("nope", Folder::Trash);
        assert_eq!(mailbox.store().messages(), before.as_slice());
    }

    #[test]
    fn test_move_selected_clears_selection() {
        let mut mailbox = sample();
        mailbox.select_message("i2");
        mailbox.move_to_folder("i2", Folder::Trash);

        assert!(mailbox.selection().message_id.is_none());
        assert_eq!(mailbox.store().get("i2").unwrap().folder, Folder::Trash);
        assert_eq!(mailbox.selected_message().unwrap().id, "i3");
    }

    #[test]
    fn test_move_other_keeps_selection() {
        let mut mailbox = sample();
        mailbox.select_message("i2");
        mailbox.move_to_folder("i3", Folder::Spam);
        assert_eq!(mailbox.selection().message_id.as_deref(), Some("i2"));
    }

    #[test]
    fn test_counts_follow_mutations() {
        let mut mailbox = sample();
        assert_eq!(mailbox.folder_counts().total(Folder::Inbox), 3);
        assert_eq!(mailbox.folder_counts().unread(Folder::Inbox), 3);

        mailbox.select_message("i1");
        mailbox.move_to_folder("i2", Folder::Trash);
        let counts = mailbox.folder_counts();
        assert_eq!(counts.total(Folder::Inbox), 2);
        assert_eq!(counts.unread(Folder::Inbox), 1);
        assert_eq!(counts.total(Folder::Trash), 1);
    }

    #[test]
    fn test_search_term_keeps_explicit_selection() {
        let mut mailbox = sample();
        mailbox.select_message("i2");
        mailbox.set_search_term("Subject i3");
        assert_eq!(mailbox.selection().message_id.as_deref(), Some("i2"));
        assert_eq!(mailbox.selected_message().unwrap().id, "i3");

        mailbox.set_search_term("");
        assert_eq!(mailbox.selected_message().unwrap().id, "i2");
    }

    #[test]
    fn test_send_without_recipient_rejected() {
        let mut mailbox = sample();
        mailbox.open_compose();
        let before = mailbox.store().messages().to_vec();
        let selection = mailbox.selection().clone();

        let result = mailbox.submit_draft_at(draft("", "hi", "x", true), now());

        assert_eq!(result, Err(ValidationError::MissingRecipient));
        assert_eq!(mailbox.store().messages(), before.as_slice());
        assert_eq!(mailbox.selection(), &selection);
        assert!(mailbox.compose().is_open());
    }

    #[test]
    fn test_save_empty_draft_uses_placeholders() {
        let mut mailbox = sample();
        mailbox.open_compose();
        let id = mailbox
            .submit_draft_at(draft("a@b.com", "", "", false), now())
            .unwrap();

        let stored = &mailbox.store().messages()[0];
        assert_eq!(stored.id, id);
        assert_eq!(stored.folder, Folder::Drafts);
        assert_eq!(stored.subject, "(No subject)");
        assert_eq!(stored.preview, "Empty message");
        assert_eq!(stored.tags, ["outbound"]);
        assert_eq!(stored.recipient_email, "a@b.com");
        assert_eq!(stored.sender_name, "You");
        assert_eq!(stored.sender_email, "you@mailbox.app");
        assert!(!stored.unread);
        assert!(!stored.starred);

        assert_eq!(mailbox.selection().folder, Folder::Drafts);
        assert_eq!(mailbox.selected_message().unwrap().id, id);
        assert!(!mailbox.compose().is_open());
    }

    #[test]
    fn test_draft_without_recipient_uses_placeholder_address() {
        let mut mailbox = sample();
        mailbox
            .submit_draft_at(draft("", "Later", "notes", false), now())
            .unwrap();
        assert_eq!(
            mailbox.store().messages()[0].recipient_email,
            "draft@mailbox.app"
        );
    }

    #[test]
    fn test_send_files_under_sent_and_truncates_preview() {
        let mut mailbox = sample();
        let body = "é".repeat(150);
        let mut d = draft("bob@x.io", "Report", &body, true);
        d.tags = vec!["q1".to_string()];

        let id = mailbox.submit_draft_at(d, now()).unwrap();
        let stored = mailbox.store().get(&id).unwrap();
        assert_eq!(stored.folder, Folder::Sent);
        assert_eq!(stored.preview.chars().count(), 120);
        assert_eq!(stored.body, body);
        assert_eq!(stored.tags, ["q1"]);
        assert_eq!(stored.timestamp, now());
    }

    #[test]
    fn test_submit_keeps_search_term_and_sort_invariant() {
        let mut mailbox = sample();
        mailbox.set_search_term("report");
        mailbox
            .submit_draft_at(draft("bob@x.io", "Report", "b", true), now())
            .unwrap();
        assert_eq!(mailbox.selection().search_term, "report");

        mailbox.set_search_term("");
        let list = mailbox.visible_messages();
        assert!(list.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_repeated_submits_get_unique_ids() {
        let mut mailbox = sample();
        let first = mailbox
            .submit_draft_at(draft("a@b.com", "", "", false), now())
            .unwrap();
        let second = mailbox
            .submit_draft_at(draft("a@b.com", "", "", false), now())
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(mailbox.store().len(), 7);
    }

    #[test]
    fn test_compose_lifecycle() {
        let mut mailbox = sample();
        assert!(mailbox.submit_compose(true).is_none());

        mailbox.open_compose();
        mailbox.composer_mut().unwrap().subject.push_str("Hello");
        // Reopening keeps the form
        mailbox.open_compose();
        assert_eq!(mailbox.composer().unwrap().subject, "Hello");

        // Rejected send keeps the form populated
        let result = mailbox.submit_compose(true).unwrap();
        assert_eq!(result, Err(ValidationError::MissingRecipient));
        assert_eq!(mailbox.composer().unwrap().subject, "Hello");

        mailbox.close_compose();
        assert!(mailbox.composer().is_none());
        mailbox.open_compose();
        assert_eq!(mailbox.composer().unwrap(), &DraftComposer::default());
    }

    #[test]
    fn test_submit_compose_stores_form() {
        let mut mailbox = sample();
        mailbox.open_compose();
        {
            let composer = mailbox.composer_mut().unwrap();
            composer.to = " carol@x.io ".to_string();
            composer.subject = "Plan".to_string();
            composer.tag_input = "a, ,b".to_string();
        }
        let id = mailbox.submit_compose(true).unwrap().unwrap();
        let stored = mailbox.store().get(&id).unwrap();
        assert_eq!(stored.recipient_email, "carol@x.io");
        assert_eq!(stored.tags, ["a", "b"]);
        assert!(mailbox.composer().is_none());
    }

    #[test]
    fn test_day_groups_through_mailbox() {
        let mailbox = sample();
        let groups = mailbox.day_groups();
        let total: usize = groups.iter().map(|g| g.messages.len()).sum();
        assert_eq!(total, 3);
        assert!(groups.windows(2).all(|w| w[0].date > w[1].date));
    }
}
