//! Top status bar: folder, counts, search results and the last status message

use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme::{Theme, symbols};
use super::widgets::{display_width, truncate_string};
use crate::app::state::AppState;

/// Status bar info for rendering
pub struct StatusInfo<'a> {
    pub folder: &'a str,
    pub unread: usize,
    pub total: usize,
    pub search_query: Option<&'a str>,
    pub search_results: usize,
    pub status_message: Option<&'a str>,
    pub account: &'a str,
    /// Whether there's an unacknowledged error (show indicator)
    pub has_error: bool,
}

impl<'a> StatusInfo<'a> {
    pub fn from_state(state: &'a AppState, visible_count: usize) -> Self {
        let selection = state.mailbox.selection();
        let counts = state.mailbox.folder_counts();
        let query = selection.search_term.trim();

        Self {
            folder: selection.folder.label(),
            unread: counts.unread(selection.folder),
            total: counts.total(selection.folder),
            search_query: (!query.is_empty()).then_some(query),
            search_results: visible_count,
            status_message: (!state.status.message.is_empty())
                .then_some(state.status.message.as_str()),
            account: &state.mailbox.identity().email,
            has_error: state.status.has_unacknowledged_error,
        }
    }
}

pub fn status_bar(frame: &mut Frame, area: Rect, info: &StatusInfo) {
    let style = Theme::status_bar();
    let width = area.width as usize;

    let mut left: Vec<Span> = vec![Span::styled(" ", style)];
    if info.has_error {
        left.push(Span::styled(
            format!("{} ", symbols::ERROR),
            Theme::status_error().add_modifier(Modifier::BOLD),
        ));
    }
    left.push(Span::styled(
        info.folder.to_string(),
        style.add_modifier(Modifier::BOLD),
    ));
    left.push(Span::styled(" │ ", Theme::status_muted()));
    match info.search_query {
        Some(query) => left.push(Span::styled(
            format!("\"{}\" ({} results)", query, info.search_results),
            style,
        )),
        None => {
            left.push(Span::styled(
                info.unread.to_string(),
                style.add_modifier(Modifier::BOLD),
            ));
            left.push(Span::styled(
                format!(" unread / {} total", info.total),
                style,
            ));
        }
    }

    let left_width: usize = left.iter().map(|s| display_width(&s.content)).sum();
    let account = format!(" {} ", info.account);
    let room = width.saturating_sub(left_width + display_width(&account) + 3);

    let mut spans = left;
    let mut used = left_width;
    if let Some(msg) = info.status_message
        && room > 4
    {
        let msg = format!(" {} ", truncate_string(msg, room));
        used += display_width(&msg);
        spans.push(Span::styled(" ", style));
        spans.push(Span::styled(msg, Theme::status_muted()));
        used += 1;
    }

    let padding = width.saturating_sub(used + display_width(&account));
    spans.push(Span::styled(" ".repeat(padding), style));
    if used + display_width(&account) <= width {
        spans.push(Span::styled(account, Theme::status_muted()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
}
