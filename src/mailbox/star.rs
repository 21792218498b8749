//! Star toggle transition table
//!
//! Starring a message outside the Starred folder files it under Starred;
//! unstarring a message inside Starred returns it to the Inbox. Every other
//! combination only flips the flag. The rule is a transition, not an
//! invariant: a starred message moved elsewhere stays starred.

use crate::mail::{Folder, Message};

/// Result of one toggle: the new flag and an optional folder change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarOutcome {
    pub starred: bool,
    pub folder: Option<Folder>,
}

/// (was_starred, in_starred_folder) -> outcome
pub const fn star_transition(was_starred: bool, in_starred_folder: bool) -> StarOutcome {
    match (was_starred, in_starred_folder) {
        (false, false) => StarOutcome {
            starred: true,
            folder: Some(Folder::Starred),
        },
        (false, true) => StarOutcome {
            starred: true,
            folder: None,
        },
        (true, true) => StarOutcome {
            starred: false,
            folder: Some(Folder::Inbox),
        },
        (true, false) => StarOutcome {
            starred: false,
            folder: None,
        },
    }
}

/// Apply the transition to a message in place
pub fn apply_star_toggle(message: &mut Message) {
    let outcome = star_transition(message.starred, message.folder == Folder::Starred);
    message.starred = outcome.starred;
    if let Some(folder) = outcome.folder {
        message.folder = folder;
    }
}
