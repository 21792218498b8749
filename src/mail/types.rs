use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseFolderError;

/// The seven fixed mailbox categories. Declaration order is sidebar order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    #[default]
    Inbox,
    Starred,
    Sent,
    Drafts,
    Archive,
    Spam,
    Trash,
}

impl Folder {
    pub const ALL: [Folder; 7] = [
        Folder::Inbox,
        Folder::Starred,
        Folder::Sent,
        Folder::Drafts,
        Folder::Archive,
        Folder::Spam,
        Folder::Trash,
    ];

    /// Position in sidebar order
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Starred => "Starred",
            Self::Sent => "Sent",
            Self::Drafts => "Drafts",
            Self::Archive => "Archive",
            Self::Spam => "Spam",
            Self::Trash => "Trash",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Starred => "starred",
            Self::Sent => "sent",
            Self::Drafts => "drafts",
            Self::Archive => "archive",
            Self::Spam => "spam",
            Self::Trash => "trash",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Folder {
    type Err = ParseFolderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|folder| folder.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseFolderError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    /// Human-readable size as supplied, e.g. "2.4 MB"
    pub size: String,
}

/// One mail item held by the message store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub folder: Folder,
    pub sender_name: String,
    pub sender_email: String,
    pub recipient_email: String,
    pub subject: String,
    pub preview: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub unread: bool,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Message {
    pub fn display_from(&self) -> &str {
        if self.sender_name.is_empty() {
            &self.sender_email
        } else {
            &self.sender_name
        }
    }

    /// Body split into newline-separated paragraphs for display
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.body.split('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_order_matches_index() {
        for (i, folder) in Folder::ALL.iter().enumerate() {
            assert_eq!(folder.index(), i);
        }
    }

    #[test]
    fn test_folder_cycle() {
        assert_eq!(Folder::Inbox.next(), Folder::Starred);
        assert_eq!(Folder::Trash.next(), Folder::Inbox);
        assert_eq!(Folder::Inbox.prev(), Folder::Trash);
    }

    #[test]
    fn test_parse_folder() {
        assert_eq!("inbox".parse::<Folder>(), Ok(Folder::Inbox));
        assert_eq!(" Trash ".parse::<Folder>(), Ok(Folder::Trash));
        assert_eq!(
            "outbox".parse::<Folder>(),
            Err(ParseFolderError("outbox".to_string()))
        );
    }

    #[test]
    fn test_paragraphs_keep_blank_lines() {
        let message = Message {
            id: "m1".to_string(),
            folder: Folder::Inbox,
            sender_name: String::new(),
            sender_email: "a@example.com".to_string(),
            recipient_email: "you@mailbox.app".to_string(),
            subject: "Hi".to_string(),
            preview: "Hi".to_string(),
            body: "one\n\ntwo".to_string(),
            timestamp: Utc::now(),
            unread: false,
            starred: false,
            tags: Vec::new(),
            attachments: Vec::new(),
        };
        assert_eq!(message.paragraphs().collect::<Vec<_>>(), ["one", "", "two"]);
        assert_eq!(message.display_from(), "a@example.com");
    }
}
