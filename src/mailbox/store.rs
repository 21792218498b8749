//! The message store: sole owner of every `Message` record.
//!
//! Reads are public. Writes are restricted to the mailbox module so every
//! mutation goes through the controller in `mailbox::Mailbox`.

use chrono::{DateTime, Utc};

use crate::mail::{Folder, Message};

#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    /// Build a store from seeded messages. Later duplicates of an id are dropped.
    pub fn new(messages: Vec<Message>) -> Self {
        let mut store = Self {
            messages: Vec::with_capacity(messages.len()),
        };
        for message in messages {
            if store.contains(&message.id) {
                tracing::warn!("Dropping message with duplicate id {}", message.id);
                continue;
            }
            store.messages.push(message);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// All messages in store order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// First message (store order) living in `folder`
    pub fn first_in_folder(&self, folder: Folder) -> Option<&Message> {
        self.messages.iter().find(|m| m.folder == folder)
    }

    /// Apply `f` to the message with `id`. Returns false when no such message exists.
    pub(super) fn update(&mut self, id: &str, f: impl FnOnce(&mut Message)) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                f(message);
                true
            }
            None => false,
        }
    }

    pub(super) fn insert_front(&mut self, message: Message) {
        self.messages.insert(0, message);
    }

    /// Generate an id that is not yet used by any message in the store
    pub(super) fn fresh_id(&self, now: DateTime<Utc>) -> String {
        let base = format!("msg-{}", now.timestamp_millis());
        if !self.contains(&base) {
            return base;
        }
        (1..)
            .map(|n| format!("{base}-{n}"))
            .find(|candidate| !self.contains(candidate))
            .unwrap_or(base)
    }
}
