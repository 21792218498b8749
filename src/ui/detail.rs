//! Message detail pane: headers, tags, body paragraphs and attachments

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use crate::app::state::AppState;
use crate::mail::Message;
use crate::mailbox::format::long_date;

use super::theme::{Theme, symbols};
use super::widgets::sanitize_text;

pub fn render_detail(frame: &mut Frame, area: Rect, state: &AppState) {
    // 1-char left padding for separation from the list border
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    let inner = chunks[1];

    let Some(message) = state.mailbox.selected_message() else {
        frame.render_widget(
            Paragraph::new("No message selected").style(Theme::text_muted()),
            inner,
        );
        return;
    };

    let paragraph = Paragraph::new(detail_text(message))
        .style(Theme::text())
        .wrap(Wrap { trim: false })
        .scroll((state.detail_scroll, 0));
    frame.render_widget(paragraph, inner);
}

fn header_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<9}", label), Theme::label()),
        Span::styled(value, Theme::text_secondary()),
    ])
}

fn detail_text(message: &Message) -> Text<'static> {
    let mut lines: Vec<Line> = Vec::new();

    let mut subject = vec![Span::styled(
        sanitize_text(&message.subject),
        Theme::text().add_modifier(Modifier::BOLD),
    )];
    if message.starred {
        subject.push(Span::styled(
            format!(" {}", symbols::STARRED),
            Theme::star_indicator(),
        ));
    }
    lines.push(Line::from(subject));
    lines.push(Line::from(""));

    let from = if message.sender_name.is_empty() {
        message.sender_email.clone()
    } else {
        format!("{} <{}>", message.sender_name, message.sender_email)
    };
    lines.push(header_line("From:", sanitize_text(&from)));
    lines.push(header_line("To:", sanitize_text(&message.recipient_email)));
    lines.push(header_line("Date:", long_date(message.timestamp)));
    lines.push(header_line("Folder:", message.folder.label().to_string()));

    if !message.tags.is_empty() {
        let mut spans = vec![Span::styled(format!("{:<9}", "Tags:"), Theme::label())];
        for (i, tag) in message.tags.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", Theme::text()));
            }
            spans.push(Span::styled(format!("[{}]", sanitize_text(tag)), Theme::tag()));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    for paragraph in message.paragraphs() {
        lines.push(Line::from(Span::styled(
            sanitize_text(paragraph),
            Theme::text(),
        )));
    }

    if !message.attachments.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Attachments ({})", message.attachments.len()),
            Theme::label(),
        )));
        for attachment in &message.attachments {
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", symbols::ATTACHMENT), Theme::text_accent()),
                Span::styled(sanitize_text(&attachment.name), Theme::text()),
                Span::styled(format!("  {}", attachment.size), Theme::text_muted()),
            ]));
        }
    }

    Text::from(lines)
}
