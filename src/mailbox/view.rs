//! View derivation: folder counts, the filtered list, day groups and the
//! resolved selection.
//!
//! Everything here is a pure function of the store and selection state and is
//! recomputed on every read. Nothing is cached, so no derived view can go
//! stale across a mutation.

use std::collections::BTreeMap;

use aho_corasick::AhoCorasick;
use chrono::NaiveDate;

use super::format::day_label;
use super::store::MessageStore;
use crate::mail::{Folder, Message};

/// Per-folder totals. All seven folders are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FolderCounts {
    total: [usize; Folder::ALL.len()],
    unread: [usize; Folder::ALL.len()],
}

impl FolderCounts {
    pub fn total(&self, folder: Folder) -> usize {
        self.total[folder.index()]
    }

    pub fn unread(&self, folder: Folder) -> usize {
        self.unread[folder.index()]
    }

    /// (folder, total) pairs in sidebar order
    pub fn iter(&self) -> impl Iterator<Item = (Folder, usize)> + '_ {
        Folder::ALL.into_iter().map(|f| (f, self.total(f)))
    }
}

pub fn folder_counts(messages: &[Message]) -> FolderCounts {
    let mut counts = FolderCounts::default();
    for message in messages {
        counts.total[message.folder.index()] += 1;
        if message.unread {
            counts.unread[message.folder.index()] += 1;
        }
    }
    counts
}

/// Compiled search term. Matching is a case-insensitive substring test.
pub struct SearchQuery {
    automaton: Option<AhoCorasick>,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        let term = raw.trim().to_lowercase();
        if term.is_empty() {
            return Self { automaton: None };
        }
        // A failed build only happens for pathological patterns; treat as match-all
        let automaton = AhoCorasick::new([&term])
            .map_err(|e| tracing::warn!("Search term not compiled: {}", e))
            .ok();
        Self { automaton }
    }

    /// Subject, preview, sender name, sender email or any tag
    pub fn matches(&self, message: &Message) -> bool {
        let Some(ac) = &self.automaton else {
            return true;
        };
        let hit = |text: &str| ac.is_match(&text.to_lowercase());

        hit(&message.subject)
            || hit(&message.preview)
            || hit(&message.sender_name)
            || hit(&message.sender_email)
            || message.tags.iter().any(|tag| hit(tag.as_str()))
    }
}

/// Messages in `folder` matching `search_term`, newest first.
/// Equal timestamps keep store order.
pub fn filter_messages<'a>(
    store: &'a MessageStore,
    folder: Folder,
    search_term: &str,
) -> Vec<&'a Message> {
    let query = SearchQuery::new(search_term);
    let mut list: Vec<&Message> = store
        .messages()
        .iter()
        .filter(|m| m.folder == folder && query.matches(m))
        .collect();
    // sort_by is stable
    list.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    list
}

/// Messages sharing one calendar date (UTC)
#[derive(Debug, Clone)]
pub struct DayGroup<'a> {
    pub date: NaiveDate,
    pub label: String,
    pub messages: Vec<&'a Message>,
}

impl DayGroup<'_> {
    /// Canonical `YYYY-MM-DD` key
    pub fn key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Partition a sorted list into day groups, newest date first.
/// Order inside a group follows the input list.
pub fn group_by_day<'a>(list: &[&'a Message]) -> Vec<DayGroup<'a>> {
    let mut groups: BTreeMap<NaiveDate, DayGroup<'a>> = BTreeMap::new();
    for &message in list {
        let date = message.timestamp.date_naive();
        groups
            .entry(date)
            .or_insert_with(|| DayGroup {
                date,
                label: day_label(message.timestamp),
                messages: Vec::new(),
            })
            .messages
            .push(message);
    }
    groups.into_values().rev().collect()
}

/// The explicitly selected message if visible, else the first visible one.
pub fn resolve_selection<'a>(list: &[&'a Message], selected_id: Option<&str>) -> Option<&'a Message> {
    selected_id
        .and_then(|id| list.iter().find(|m| m.id == id).copied())
        .or_else(|| list.first().copied())
}
