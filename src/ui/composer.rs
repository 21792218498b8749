//! Compose drawer drawn over the right side of the mailbox

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::theme::Theme;
use crate::constants::{COMPOSE_DRAWER_MIN_WIDTH, COMPOSE_DRAWER_PERCENT};
use crate::mailbox::{ComposerField, DraftComposer};

/// Right-hand slice of `area` the drawer covers
pub fn drawer_area(area: Rect) -> Rect {
    let width = (area.width as u32 * COMPOSE_DRAWER_PERCENT as u32 / 100) as u16;
    let width = width.max(COMPOSE_DRAWER_MIN_WIDTH).min(area.width);
    Rect::new(area.x + area.width - width, area.y, width, area.height)
}

pub fn render_composer(frame: &mut Frame, area: Rect, composer: &DraftComposer, from: &str) {
    let area = drawer_area(area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .style(Theme::main_bg())
        .title(" New message ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // From
            Constraint::Length(3), // To
            Constraint::Length(3), // Subject
            Constraint::Min(3),    // Message
            Constraint::Length(3), // Tags
        ])
        .split(inner);

    let from_line = Line::from(vec![
        Span::styled(" From ", Theme::label()),
        Span::styled(from.to_string(), Theme::text_secondary()),
    ]);
    frame.render_widget(Paragraph::new(from_line), chunks[0]);

    for (field, area) in [
        (ComposerField::To, chunks[1]),
        (ComposerField::Subject, chunks[2]),
        (ComposerField::Body, chunks[3]),
        (ComposerField::Tags, chunks[4]),
    ] {
        render_field(frame, area, composer, field);
    }
}

fn render_field(frame: &mut Frame, area: Rect, composer: &DraftComposer, field: ComposerField) {
    let focused = composer.field == field;
    let value = composer.value(field);

    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let title = match field {
        ComposerField::Body => format!(" {} ({} chars) ", field.label(), value.chars().count()),
        ComposerField::Tags => format!(" {} (comma separated) ", field.label()),
        _ => format!(" {} ", field.label()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let style = if focused {
        Theme::text()
    } else {
        Theme::text_secondary()
    };
    let text = if focused {
        format!("{}│", value)
    } else {
        value.to_string()
    };

    let mut paragraph = Paragraph::new(text).style(style);
    if field.is_multiline() {
        // Keep the cursor line visible once the body outgrows the box
        let lines = composer.body.split('\n').count() as u16;
        let scroll = lines.saturating_sub(inner.height);
        paragraph = paragraph.wrap(Wrap { trim: false }).scroll((scroll, 0));
    }
    frame.render_widget(paragraph, inner);
}
