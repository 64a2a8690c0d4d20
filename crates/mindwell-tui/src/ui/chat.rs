//! Scrollable chat feed — transcript plus typing indicator and quick responses.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use mindwell_core::responder::QUICK_RESPONSES;
use mindwell_core::types::Sender;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" AI Wellness Companion — online ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Build display lines from messages (bottom-up with scroll offset)
    let visible_height = inner.height as usize;
    let total = app.messages.len();
    let end = total.saturating_sub(app.scroll_offset);
    let start = end.saturating_sub(visible_height * 2); // overshoot for wrapping

    let mut lines: Vec<Line> = Vec::new();
    for message in &app.messages[start..end] {
        let (fg, prefix) = match message.sender {
            Sender::Assistant => (Color::Green, "< "),
            Sender::User => (Color::Cyan, "> "),
        };
        for line in message.text.lines() {
            lines.push(Line::styled(
                format!("{}{}", prefix, line),
                Style::default().fg(fg),
            ));
        }
        lines.push(Line::raw(""));
    }

    if app.typing {
        lines.push(Line::styled(
            "< ...",
            Style::default().fg(Color::DarkGray).italic(),
        ));
    }

    // Quick responses, offered until the first exchange happens
    if app.messages.len() == 1 && !app.typing {
        lines.push(Line::styled(
            "Quick responses (Tab out of the input, then 1-4):",
            Style::default().fg(Color::DarkGray),
        ));
        for (i, qr) in QUICK_RESPONSES.iter().enumerate() {
            lines.push(Line::styled(
                format!("  {}. {}", i + 1, qr),
                Style::default().fg(Color::Yellow),
            ));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
