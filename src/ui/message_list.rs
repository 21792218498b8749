//! Day-grouped message list with virtual scrolling.

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::state::AppState;
use crate::constants::SCROLL_TARGET_FRACTION;
use crate::mail::Message;
use crate::mailbox::format::friendly_time;

use super::theme::{Theme, symbols, with_selection_bg};
use super::widgets::{display_width, sanitize_text, truncate_string};

/// Lines taken by one message row
const ROW_LINES: usize = 2;

/// A rendered line of the list, before scrolling is applied
enum Row<'a> {
    Header(String),
    Message(&'a Message),
}

pub fn render_message_list(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    now: DateTime<Utc>,
    show_border: bool,
) {
    let inner = if show_border {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Theme::border());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    } else {
        area
    };

    let groups = state.mailbox.day_groups();
    if groups.is_empty() {
        let term = state.mailbox.selection().search_term.trim();
        let msg = if term.is_empty() {
            format!("No messages in {}", state.mailbox.selection().folder.label())
        } else {
            format!("No messages match \"{}\"", term)
        };
        frame.render_widget(Paragraph::new(msg).style(Theme::text_muted()), inner);
        return;
    }

    let selected_id = state.mailbox.selected_message().map(|m| m.id.as_str());

    // Phase 1: flatten groups and find the selected message's line
    let mut rows: Vec<(usize, Row)> = Vec::new();
    let mut total_lines = 0;
    let mut selected_line = 0;
    for group in &groups {
        rows.push((total_lines, Row::Header(group.label.clone())));
        total_lines += 1;
        for &message in &group.messages {
            if Some(message.id.as_str()) == selected_id {
                selected_line = total_lines;
            }
            rows.push((total_lines, Row::Message(message)));
            total_lines += ROW_LINES;
        }
    }

    // Phase 2: keep the selection a quarter of the way down
    let visible_lines = inner.height as usize;
    let scroll_offset = scroll_offset(selected_line, total_lines, visible_lines);
    let scroll_end = scroll_offset + visible_lines;

    // Phase 3: build items only for rows in view
    let width = inner.width as usize;
    let mut items: Vec<ListItem> = Vec::with_capacity(visible_lines);
    for (offset, row) in rows {
        if offset >= scroll_end {
            break;
        }
        let lines = match row {
            Row::Header(label) => vec![day_header(label, width)],
            Row::Message(message) => {
                let selected = Some(message.id.as_str()) == selected_id;
                message_lines(message, selected, width, now)
            }
        };
        for (i, line) in lines.into_iter().enumerate() {
            let line_no = offset + i;
            if line_no >= scroll_offset && line_no < scroll_end {
                items.push(ListItem::new(line));
            }
        }
    }

    frame.render_widget(List::new(items).style(Theme::main_bg()), inner);
}

/// First visible line so `selected_line` sits near the top quarter of the view
fn scroll_offset(selected_line: usize, total_lines: usize, visible_lines: usize) -> usize {
    let target_position = visible_lines / SCROLL_TARGET_FRACTION;
    selected_line
        .saturating_sub(target_position)
        .min(total_lines.saturating_sub(visible_lines))
}

fn day_header(label: String, width: usize) -> Line<'static> {
    let rule = "─".repeat(width.saturating_sub(display_width(&label) + 4));
    Line::from(vec![
        Span::styled(format!(" {} ", label), Theme::day_header()),
        Span::styled(rule, Theme::border()),
    ])
}

fn message_lines(
    message: &Message,
    selected: bool,
    width: usize,
    now: DateTime<Utc>,
) -> Vec<Line<'static>> {
    let bg = |style| with_selection_bg(style, selected);

    let unread = if message.unread {
        Span::styled(format!(" {}", symbols::UNREAD), bg(Theme::unread_indicator()))
    } else {
        Span::styled(format!(" {}", symbols::READ), bg(Theme::text()))
    };
    let star = if message.starred {
        Span::styled(format!("{} ", symbols::STARRED), bg(Theme::star_indicator()))
    } else {
        Span::styled(format!("{} ", symbols::UNSTARRED), bg(Theme::text()))
    };

    let time = format!(" {} ", friendly_time(message.timestamp, now));
    let sender_room = width.saturating_sub(4 + display_width(&time));
    let sender = truncate_string(&sanitize_text(message.display_from()), sender_room);
    let padding = sender_room.saturating_sub(display_width(&sender));
    let sender_style = if message.unread {
        Theme::text_unread()
    } else {
        Theme::text()
    };

    let first = Line::from(vec![
        unread,
        star,
        Span::styled(sender, bg(sender_style)),
        Span::styled(" ".repeat(padding), bg(Theme::text())),
        Span::styled(time, bg(Theme::text_muted())),
    ]);

    let marker = if message.attachments.is_empty() {
        "    ".to_string()
    } else {
        format!("  {} ", symbols::ATTACHMENT)
    };
    let summary_room = width.saturating_sub(display_width(&marker) + 1);
    let subject = sanitize_text(&message.subject);
    let subject_width = display_width(&subject).min(summary_room);
    let subject = truncate_string(&subject, summary_room);
    let preview_room = summary_room.saturating_sub(subject_width + 3);
    let mut second = vec![
        Span::styled(marker, bg(Theme::text_accent())),
        Span::styled(subject, bg(Theme::text_secondary())),
    ];
    if preview_room > 3 {
        let preview = truncate_string(&sanitize_text(&message.preview), preview_room);
        let used = subject_width + 3 + display_width(&preview);
        second.push(Span::styled(" - ", bg(Theme::text_muted())));
        second.push(Span::styled(preview, bg(Theme::text_muted())));
        second.push(Span::styled(
            " ".repeat(summary_room.saturating_sub(used) + 1),
            bg(Theme::text()),
        ));
    } else {
        second.push(Span::styled(
            " ".repeat(summary_room.saturating_sub(subject_width) + 1),
            bg(Theme::text()),
        ));
    }

    vec![first, Line::from(second)]
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::state::tests::sample_state;
    use crate::mail::Folder;
    use crate::ui::tests::buffer_lines;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 10, 0, 0).unwrap()
    }

    fn render(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_message_list(f, f.area(), state, now(), false))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_list_groups_by_day_with_headers() {
        let state = sample_state();
        let lines = render(&state, 60, 20);

        assert!(lines[0].contains("Mar 14, 2024"));
        // Two messages on the 14th, two lines each
        assert!(lines[5].contains("Mar 13, 2024"));
        assert!(lines[1].contains("48m ago"));
    }

    #[test]
    fn test_list_empty_folder_message() {
        let mut state = sample_state();
        state.mailbox.set_search_term("zzz-no-such-thing");
        let lines = render(&state, 60, 5);
        assert!(lines[0].contains("No messages match \"zzz-no-such-thing\""));

        let mut state = sample_state();
        let id = state.mailbox.store().first_in_folder(Folder::Trash).unwrap().id.clone();
        state.mailbox.move_to_folder(&id, Folder::Archive);
        state.mailbox.select_folder(Folder::Trash);
        let lines = render(&state, 60, 5);
        assert!(lines[0].contains("No messages in Trash"));
    }

    #[test]
    fn test_scroll_offset_keeps_selection_in_view() {
        // Fits entirely: never scrolls
        assert_eq!(scroll_offset(10, 12, 20), 0);
        // Selection near the top stays put
        assert_eq!(scroll_offset(3, 100, 20), 0);
        // Deep selection sits a quarter of the way down
        assert_eq!(scroll_offset(50, 100, 20), 45);
        // Clamped at the end of the list
        assert_eq!(scroll_offset(99, 100, 20), 80);
    }
}
