//! Status bar — screen name, typing indicator, toast line, navigation hints.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{App, Screen};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.screen.title()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    if app.typing {
        spans.push(Span::styled(
            " companion is typing... ",
            Style::default().fg(Color::Green),
        ));
    }

    if let Some(toast) = app.active_toast() {
        spans.push(Span::styled(
            format!(" {} ", toast),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
    }

    let hint = match app.screen {
        Screen::Chat => " Esc: dashboard | Ctrl+C: quit",
        Screen::Dashboard => " c/t/p/a: screens | Ctrl+C: quit",
        _ => " Esc: dashboard | Ctrl+C: quit",
    };
    spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
