//! Tracker screen — today's logging, weekly overview bars, insights.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use mindwell_core::tracker::{mood_band, stress_band, Band};
use mindwell_core::types::Trend;

use crate::app::{App, TrackerTarget};

fn band_color(band: Band) -> Color {
    match band {
        Band::Great => Color::Green,
        Band::Good => Color::LightGreen,
        Band::Warn => Color::Yellow,
        Band::Bad => Color::Red,
    }
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Flat => "→",
    }
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // logging
            Constraint::Length(3),  // weekly averages
            Constraint::Min(8),     // per-day bars
            Constraint::Length(4),  // insights
        ])
        .split(area);

    // Today's logging controls
    let target = match app.tracker_target {
        TrackerTarget::Mood => "mood",
        TrackerTarget::Stress => "stress",
    };
    let log_block = Block::default()
        .title(" Log Today ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let log_inner = log_block.inner(layout[0]);
    frame.render_widget(log_block, layout[0]);
    frame.render_widget(
        Paragraph::new(format!(
            "logging {} — press 1-9 (0 = 10) | m: mood | s: stress",
            target
        ))
        .style(Style::default().fg(Color::Gray)),
        log_inner,
    );

    // Weekly averages with trend arrows
    let stats = app.tracker.weekly_stats();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Average Mood ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1} {}", stats.avg_mood, trend_arrow(stats.mood_trend)),
                Style::default().fg(Color::Green).bold(),
            ),
            Span::raw("    "),
            Span::styled(" Average Stress ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1} {}", stats.avg_stress, trend_arrow(stats.stress_trend)),
                Style::default().fg(Color::Yellow).bold(),
            ),
        ])),
        layout[1],
    );

    // Per-day bars: one mood and one stress row per day
    let mut lines: Vec<Line> = Vec::new();
    for record in app.tracker.week() {
        let mut spans = vec![Span::styled(
            format!(" {:<4}", record.day),
            Style::default().fg(Color::White),
        )];
        match record.mood {
            Some(v) => spans.push(Span::styled(
                format!("mood   {:<10} {:>2}/10  ", "█".repeat(v as usize), v),
                Style::default().fg(band_color(mood_band(v))),
            )),
            None => spans.push(Span::styled(
                "mood   (not logged)     ",
                Style::default().fg(Color::DarkGray),
            )),
        }
        match record.stress {
            Some(v) => spans.push(Span::styled(
                format!("stress {:<10} {:>2}/10", "█".repeat(v as usize), v),
                Style::default().fg(band_color(stress_band(v))),
            )),
            None => spans.push(Span::styled(
                "stress (not logged)",
                Style::default().fg(Color::DarkGray),
            )),
        }
        lines.push(Line::from(spans));
    }
    let week_block = Block::default()
        .title(" Weekly Overview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let week_inner = week_block.inner(layout[2]);
    frame.render_widget(week_block, layout[2]);
    frame.render_widget(Paragraph::new(lines), week_inner);

    // Insights
    let mut insight_lines: Vec<Line> = Vec::new();
    for insight in app.tracker.insights() {
        insight_lines.push(Line::from(vec![
            Span::styled(
                format!(" {} — ", insight.title),
                Style::default().fg(Color::Cyan).bold(),
            ),
            Span::styled(insight.description, Style::default().fg(Color::Gray)),
        ]));
    }
    if insight_lines.is_empty() {
        insight_lines.push(Line::styled(
            " Log a few days to see insights.",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(insight_lines), layout[3]);
}
