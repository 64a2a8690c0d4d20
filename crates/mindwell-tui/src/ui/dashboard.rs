//! Dashboard — greeting, quick mood check, tip of the day, quick actions.

use chrono::{Local, Timelike};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use mindwell_core::wellness::{tip_of_the_day, MOOD_OPTIONS};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // greeting
            Constraint::Length(4), // mood check
            Constraint::Length(5), // daily tip
            Constraint::Min(3),    // quick actions
        ])
        .split(area);

    let hour = Local::now().hour();
    let part_of_day = match hour {
        5..=11 => "morning",
        12..=17 => "afternoon",
        _ => "evening",
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                format!(" Good {}, {}!", part_of_day, app.config.user_name),
                Style::default().fg(Color::White).bold(),
            ),
            Line::styled(
                " How are you feeling today?",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        layout[0],
    );

    // Quick mood check
    let mood_block = Block::default()
        .title(" Quick Mood Check (1-5) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let mood_inner = mood_block.inner(layout[1]);
    frame.render_widget(mood_block, layout[1]);

    let mut spans = Vec::new();
    for (i, option) in MOOD_OPTIONS.iter().enumerate() {
        let selected = app.quick_mood == Some(i);
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(
            format!(" {}.{} {} ", i + 1, option.emoji, option.label),
            style,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), mood_inner);

    // Tip of the day
    let tip = tip_of_the_day(Local::now().date_naive());
    let tip_block = Block::default()
        .title(" Today's Tip ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let tip_inner = tip_block.inner(layout[2]);
    frame.render_widget(tip_block, layout[2]);
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(tip.title, Style::default().fg(Color::Green).bold()),
            Line::styled(tip.description, Style::default().fg(Color::Gray)),
        ])
        .wrap(Wrap { trim: true }),
        tip_inner,
    );

    // Quick actions
    let actions = Paragraph::new(vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(" c ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" AI Chat   "),
            Span::styled(" t ", Style::default().fg(Color::Black).bg(Color::Green)),
            Span::raw(" Tracker   "),
            Span::styled(" p ", Style::default().fg(Color::Black).bg(Color::Magenta)),
            Span::raw(" Profile   "),
            Span::styled(" a ", Style::default().fg(Color::Black).bg(Color::Yellow)),
            Span::raw(" Admin"),
        ]),
    ]);
    frame.render_widget(actions, layout[3]);
}
