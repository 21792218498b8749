mod composer;
mod detail;
mod help;
mod message_list;
mod sidebar;
mod status_bar;
pub mod theme;
mod widgets;

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Paragraph},
};

use crate::app::state::{AppState, ModalState};
use crate::constants::{
    FOLDER_SIDEBAR_WIDTH, MIN_SIDEBAR_VIEW_WIDTH, MIN_SPLIT_VIEW_WIDTH, SPLIT_RATIO_MAX,
    SPLIT_RATIO_MIN,
};

use composer::render_composer;
use detail::render_detail;
use help::render_help_popup;
use message_list::render_message_list;
use sidebar::render_sidebar;
use status_bar::{StatusInfo, status_bar};
use theme::Theme;
use widgets::{error_bar, help_bar};

/// Draw one frame. `now` drives the relative times in the list.
pub fn render(frame: &mut Frame, state: &AppState, now: DateTime<Utc>) {
    frame.render_widget(Block::default().style(Theme::main_bg()), frame.area());

    let show_search_bar =
        state.modal.is_search() || !state.mailbox.selection().search_term.is_empty();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if show_search_bar {
            vec![
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Search bar
                Constraint::Min(0),    // Panes
                Constraint::Length(1), // Help bar or error
            ]
        } else {
            vec![
                Constraint::Length(1), // Status bar
                Constraint::Min(0),    // Panes
                Constraint::Length(1), // Help bar or error
            ]
        })
        .split(frame.area());

    let (status_area, search_area, main_area, help_area) = if show_search_bar {
        (chunks[0], Some(chunks[1]), chunks[2], chunks[3])
    } else {
        (chunks[0], None, chunks[1], chunks[2])
    };

    let visible_count = state.mailbox.visible_messages().len();
    status_bar(
        frame,
        status_area,
        &StatusInfo::from_state(state, visible_count),
    );

    if let Some(area) = search_area {
        render_search_bar(frame, area, state);
    }

    render_panes(frame, main_area, state, now);

    if let Some(ref error) = state.status.error {
        error_bar(frame, help_area, error);
    } else {
        help_bar(frame, help_area, footer_hints(state));
    }

    // Overlays, drawn last so they sit on top
    if let Some(composer) = state.mailbox.composer() {
        render_composer(frame, main_area, composer, &state.mailbox.identity().email);
    }
    if let ModalState::Help {
        ref keybindings,
        scroll,
    } = state.modal
    {
        render_help_popup(frame, frame.area(), keybindings, scroll);
    }
}

/// Sidebar, list and detail side by side; narrow terminals drop the
/// sidebar first, then the detail pane
fn render_panes(frame: &mut Frame, area: Rect, state: &AppState, now: DateTime<Utc>) {
    let content = if state.show_sidebar && area.width >= MIN_SIDEBAR_VIEW_WIDTH {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(FOLDER_SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(area);
        render_sidebar(frame, split[0], state);
        split[1]
    } else {
        area
    };

    if area.width >= MIN_SPLIT_VIEW_WIDTH {
        let ratio = state.split_ratio.clamp(SPLIT_RATIO_MIN, SPLIT_RATIO_MAX);
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(ratio),
                Constraint::Percentage(100 - ratio),
            ])
            .split(content);
        render_message_list(frame, split[0], state, now, true);
        render_detail(frame, split[1], state);
    } else {
        render_message_list(frame, content, state, now, false);
    }
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.modal.is_search() {
        Theme::status_bar()
    } else {
        Theme::text_secondary()
    };
    let cursor = if state.modal.is_search() { "│" } else { "" };
    let text = format!(" / {}{} ", state.mailbox.selection().search_term, cursor);

    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn footer_hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
    if state.is_composing() {
        &[
            ("Tab", "next field"),
            ("Ctrl+S", "send"),
            ("Ctrl+D", "save draft"),
            ("Esc", "discard"),
        ]
    } else if state.modal.is_help() {
        &[("j/k", "scroll"), ("Esc", "close")]
    } else if state.modal.is_search() {
        &[("Type", "search"), ("Enter/Esc", "done")]
    } else {
        &[("Enter", "open"), ("/", "search"), (".", "help")]
    }
}
