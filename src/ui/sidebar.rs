//! Folder sidebar with per-folder counts

use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::theme::{Theme, symbols, with_selection_bg};
use super::widgets::display_width;
use crate::app::state::AppState;
use crate::mail::Folder;

pub fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let counts = state.mailbox.folder_counts();
    let current = state.mailbox.selection().folder;
    let width = inner.width as usize;

    let items: Vec<ListItem> = counts
        .iter()
        .map(|(folder, total)| {
            let selected = folder == current;
            folder_line(folder, total, counts.unread(folder), selected, width)
        })
        .map(ListItem::new)
        .collect();

    frame.render_widget(List::new(items).style(Theme::main_bg()), inner);
}

/// "▶ 1 Inbox      3/5", unread part omitted when nothing is unread
fn folder_line(
    folder: Folder,
    total: usize,
    unread: usize,
    selected: bool,
    width: usize,
) -> Line<'static> {
    let marker = if selected {
        symbols::CURRENT_FOLDER
    } else {
        " "
    };
    let name = format!("{} {} {}", marker, folder.index() + 1, folder.label());
    let count = if unread > 0 {
        format!("{}/{} ", unread, total)
    } else {
        format!("{} ", total)
    };
    let padding = width.saturating_sub(display_width(&name) + display_width(&count));

    let name_style = if selected {
        Theme::selected_bold()
    } else if unread > 0 {
        Theme::text_unread()
    } else {
        Theme::text_secondary()
    };
    let count_style = if unread > 0 {
        Theme::unread_indicator().add_modifier(Modifier::BOLD)
    } else {
        Theme::text_muted()
    };

    Line::from(vec![
        Span::styled(name, name_style),
        Span::styled(" ".repeat(padding), with_selection_bg(Theme::text(), selected)),
        Span::styled(count, with_selection_bg(count_style, selected)),
    ])
}
