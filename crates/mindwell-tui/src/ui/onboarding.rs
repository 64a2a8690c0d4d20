//! Onboarding walkthrough — one feature card per step with a progress row.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use mindwell_core::wellness::ONBOARDING_STEPS;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Welcome to MindWell ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // progress
            Constraint::Min(6),    // card
            Constraint::Length(1), // hint
        ])
        .split(inner);

    // Progress indicator — filled dot per completed step
    let dots: Vec<Span> = ONBOARDING_STEPS
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i <= app.onboarding_step {
                Span::styled(" ● ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled(" ○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        layout[0],
    );

    let step = &ONBOARDING_STEPS[app.onboarding_step.min(ONBOARDING_STEPS.len() - 1)];
    let card = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(step.title, Style::default().fg(Color::White).bold()),
        Line::raw(""),
        Line::styled(step.description, Style::default().fg(Color::Gray)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(card, layout[1]);

    let last = app.onboarding_step + 1 == ONBOARDING_STEPS.len();
    let hint = if last {
        "Enter: get started | Left: back | s: skip"
    } else {
        "Enter/Right: next | Left: back | s: skip"
    };
    frame.render_widget(
        Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        layout[2],
    );
}
