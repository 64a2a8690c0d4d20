//! Splash screen — app name and tagline, auto-advances to onboarding.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn draw(frame: &mut Frame, area: Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(5),
            Constraint::Percentage(40),
        ])
        .split(area);

    let lines = vec![
        Line::styled("MindWell", Style::default().fg(Color::Cyan).bold()),
        Line::raw(""),
        Line::styled(
            "Your Mental Wellness Journey",
            Style::default().fg(Color::Gray),
        ),
        Line::raw(""),
        Line::styled("press any key", Style::default().fg(Color::DarkGray)),
    ];

    let splash = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(splash, vertical[1]);
}
