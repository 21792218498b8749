//! Keybinding help popup

use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use super::theme::Theme;
use crate::input::KeybindingEntry;

const KEY_COLUMN_WIDTH: usize = 12;

/// Centered rect clamped between min and max size, constrained to fit `area`
fn centered_rect_constrained(
    area: Rect,
    min_width: u16,
    max_width: u16,
    min_height: u16,
    max_height: u16,
) -> Rect {
    let w = max_width
        .min(area.width.saturating_sub(4))
        .max(min_width)
        .min(area.width);
    let h = max_height
        .min(area.height.saturating_sub(4))
        .max(min_height)
        .min(area.height);

    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

pub fn render_help_popup(frame: &mut Frame, area: Rect, keys: &[KeybindingEntry], scroll: usize) {
    let items = help_lines(keys, 46);
    let popup_area = centered_rect_constrained(area, 36, 50, 10, items.len() as u16 + 2);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .title_bottom(" j/k scroll │ . or Esc close ")
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .style(Theme::main_bg());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let visible: Vec<ListItem> = help_lines(keys, inner.width)
        .into_iter()
        .skip(scroll)
        .map(ListItem::new)
        .collect();
    frame.render_widget(List::new(visible), inner);
}

/// Entries grouped under "── Category ──" headers, blank line between groups
fn help_lines(keys: &[KeybindingEntry], width: u16) -> Vec<Line<'_>> {
    let mut lines: Vec<Line> = Vec::new();
    let mut current_category: Option<&str> = None;

    for entry in keys {
        if current_category != Some(entry.category) {
            if current_category.is_some() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(vec![
                Span::styled(
                    format!("── {} ", entry.category),
                    Theme::text_secondary().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "─".repeat(width.saturating_sub(entry.category.len() as u16 + 4) as usize),
                    Theme::border(),
                ),
            ]));
            current_category = Some(entry.category);
        }

        let key_display = if entry.key.chars().count() > KEY_COLUMN_WIDTH {
            entry.key.chars().take(KEY_COLUMN_WIDTH).collect::<String>()
        } else {
            format!("{:width$}", entry.key, width = KEY_COLUMN_WIDTH)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(key_display, Theme::text_accent()),
            Span::styled(entry.description.as_str(), Theme::text()),
        ]));
    }

    lines
}
