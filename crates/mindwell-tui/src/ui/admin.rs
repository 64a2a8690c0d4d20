//! Admin dashboard — usage stat cards and the recent users table.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use mindwell_core::types::RiskLevel;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    let stats = app.admin.stats();
    let cards = Paragraph::new(Line::from(vec![
        Span::styled(" Total Users ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}  ", stats.total_users), Style::default().fg(Color::White).bold()),
        Span::styled(" Active ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}  ", stats.active_users), Style::default().fg(Color::Green).bold()),
        Span::styled(" Chat Sessions ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}  ", stats.chat_sessions), Style::default().fg(Color::Cyan).bold()),
        Span::styled(" Risk Alerts ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}", stats.high_risk_alerts), Style::default().fg(Color::Yellow).bold()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(cards, layout[0]);

    let rows: Vec<Row> = app
        .admin
        .users()
        .iter()
        .map(|user| {
            let risk_color = match user.risk {
                RiskLevel::Low => Color::Green,
                RiskLevel::Medium => Color::Yellow,
                RiskLevel::High => Color::Red,
            };
            Row::new(vec![
                Cell::from(user.name.clone()),
                Cell::from(user.email.clone()),
                Cell::from(if user.active { "active" } else { "inactive" }),
                Cell::from(user.last_active.clone()),
                Cell::from(user.mood_trend.to_string()),
                Cell::from(user.risk.to_string()).style(Style::default().fg(risk_color)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(24),
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Length(6),
            Constraint::Length(7),
        ],
    )
    .header(
        Row::new(vec!["Name", "Email", "Status", "Last active", "Mood", "Risk"])
            .style(Style::default().fg(Color::DarkGray)),
    )
    .block(
        Block::default()
            .title(" Recent Users ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(table, layout[1]);
}
