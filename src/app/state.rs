use std::time::Instant;

use crate::config::UiConfig;
use crate::constants::ERROR_TTL_SECS;
use crate::input::KeybindingEntry;
use crate::mailbox::Mailbox;

/// Modal overlay state - only one can be active at a time
#[derive(Debug, Clone, Default)]
pub enum ModalState {
    #[default]
    None,
    Search,
    Help {
        keybindings: Vec<KeybindingEntry>,
        scroll: usize,
    },
}

impl ModalState {
    pub fn is_search(&self) -> bool {
        matches!(self, Self::Search)
    }

    pub fn is_help(&self) -> bool {
        matches!(self, Self::Help { .. })
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Error and status message state
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub error: Option<String>,
    pub error_time: Option<Instant>,
    pub message: String,
    /// Persists after error bar expires - shown as indicator in status bar
    pub has_unacknowledged_error: bool,
}

impl StatusState {
    pub fn set_error(&mut self, error: impl ToString) {
        self.error = Some(error.to_string());
        self.error_time = Some(Instant::now());
        self.has_unacknowledged_error = true;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.error_time = None;
    }

    /// Call on user input to dismiss the status bar indicator
    pub fn acknowledge_error(&mut self) {
        self.has_unacknowledged_error = false;
    }

    /// Clear error if TTL expired. Returns true if error was cleared.
    pub fn clear_error_if_expired(&mut self) -> bool {
        if let Some(time) = self.error_time
            && time.elapsed().as_secs() >= ERROR_TTL_SECS
        {
            self.clear_error();
            true
        } else {
            false
        }
    }

    pub fn set_message(&mut self, msg: impl ToString) {
        self.message = msg.to_string();
    }
}

/// Everything the renderer needs. Cloned into the render thread each frame.
#[derive(Debug, Clone)]
pub struct AppState {
    pub mailbox: Mailbox,
    pub modal: ModalState,
    pub status: StatusState,
    /// Detail pane scroll offset, reset whenever the selection moves
    pub detail_scroll: u16,

    // UI settings
    pub split_ratio: u16,
    pub show_sidebar: bool,
}

impl AppState {
    pub fn new(mailbox: Mailbox, ui: &UiConfig) -> Self {
        Self {
            mailbox,
            modal: ModalState::None,
            status: StatusState::default(),
            detail_scroll: 0,
            split_ratio: ui.clamped_split_ratio(),
            show_sidebar: ui.sidebar,
        }
    }

    /// Position of the resolved selection in the visible list
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.mailbox.selected_message()?;
        self.mailbox
            .visible_messages()
            .iter()
            .position(|m| m.id == selected.id)
    }

    /// Id of the visible message `delta` rows away from the selection,
    /// clamped to the ends of the list
    pub fn neighbor_id(&self, delta: isize) -> Option<String> {
        let list = self.mailbox.visible_messages();
        if list.is_empty() {
            return None;
        }
        let current = self.selected_index().unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, list.len() as isize - 1) as usize;
        Some(list[target].id.clone())
    }

    pub fn first_id(&self) -> Option<String> {
        self.mailbox.visible_messages().first().map(|m| m.id.clone())
    }

    pub fn last_id(&self) -> Option<String> {
        self.mailbox.visible_messages().last().map(|m| m.id.clone())
    }

    pub fn selected_id(&self) -> Option<String> {
        self.mailbox.selected_message().map(|m| m.id.clone())
    }

    pub fn is_composing(&self) -> bool {
        self.mailbox.compose().is_open()
    }

    pub fn set_error(&mut self, error: impl ToString) {
        self.status.set_error(error);
    }

    pub fn clear_error_if_expired(&mut self) -> bool {
        self.status.clear_error_if_expired()
    }

    pub fn acknowledge_error(&mut self) {
        self.status.acknowledge_error();
    }

    pub fn set_status(&mut self, msg: impl ToString) {
        self.status.set_message(msg);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::IdentityConfig;
    use crate::mail::source::parse_messages;

    /// State over the bundled sample mailbox
    pub(crate) fn sample_state() -> AppState {
        let messages = parse_messages(include_str!("../../data/messages.toml")).unwrap();
        AppState::new(
            Mailbox::new(messages, IdentityConfig::default()),
            &UiConfig::default(),
        )
    }

    #[test]
    fn test_neighbor_clamps_at_ends() {
        let state = sample_state();
        let list: Vec<String> = state
            .mailbox
            .visible_messages()
            .iter()
            .map(|m| m.id.clone())
            .collect();

        let mut state = state;
        state.mailbox.select_message(&list[0]);
        assert_eq!(state.neighbor_id(-1).as_deref(), Some(list[0].as_str()));
        assert_eq!(state.neighbor_id(1).as_deref(), Some(list[1].as_str()));
        assert_eq!(state.last_id().as_deref(), list.last().map(String::as_str));
        assert_eq!(
            state.neighbor_id(100).as_deref(),
            list.last().map(String::as_str)
        );
    }

    #[test]
    fn test_neighbor_in_empty_folder() {
        let mut state = sample_state();
        state.mailbox.set_search_term("no message mentions this");
        assert!(state.neighbor_id(1).is_none());
        assert!(state.selected_index().is_none());
    }

    #[test]
    fn test_error_ttl() {
        let mut status = StatusState::default();
        status.set_error("boom");
        assert!(!status.clear_error_if_expired());
        assert!(status.error.is_some());

        status.error_time = Instant::now().checked_sub(std::time::Duration::from_secs(ERROR_TTL_SECS));
        assert!(status.clear_error_if_expired());
        assert!(status.error.is_none());
        assert!(status.has_unacknowledged_error);
        status.acknowledge_error();
        assert!(!status.has_unacknowledged_error);
    }

    #[test]
    fn test_split_ratio_from_config() {
        let ui = UiConfig {
            split_ratio: 5,
            ..Default::default()
        };
        let state = AppState::new(
            Mailbox::new(Vec::new(), IdentityConfig::default()),
            &ui,
        );
        assert_eq!(state.split_ratio, crate::constants::SPLIT_RATIO_MIN);
        assert!(state.show_sidebar);
    }
}
