//! Profile & settings screen — account fields and preference toggles.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

fn check(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // account
            Constraint::Length(6), // notifications
            Constraint::Min(5),    // privacy
        ])
        .split(area);

    let account = Paragraph::new(vec![
        Line::styled(format!(" Name    {}", app.profile.name), Style::default().fg(Color::White)),
        Line::styled(format!(" Email   {}", app.profile.email), Style::default().fg(Color::Gray)),
        Line::styled(format!(" Age     {}", app.profile.age), Style::default().fg(Color::Gray)),
        Line::styled(format!(" Gender  {}", app.profile.gender), Style::default().fg(Color::Gray)),
        Line::styled(format!(" Role    {}", app.profile.role), Style::default().fg(Color::Gray)),
    ])
    .block(
        Block::default()
            .title(" Account ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(account, layout[0]);

    let n = &app.notifications;
    let notifications = Paragraph::new(vec![
        Line::raw(format!(" 1 {} Daily tips", check(n.daily_tips))),
        Line::raw(format!(" 2 {} Mood reminders", check(n.mood_reminders))),
        Line::raw(format!(" 3 {} Chat messages", check(n.chat_messages))),
        Line::raw(format!(" 4 {} Weekly reports", check(n.weekly_reports))),
    ])
    .block(
        Block::default()
            .title(" Notifications (press number to toggle) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(notifications, layout[1]);

    let p = &app.privacy;
    let privacy = Paragraph::new(vec![
        Line::raw(format!(" 5 {} Share progress", check(p.share_progress))),
        Line::raw(format!(" 6 {} Anonymous data", check(p.anonymous_data))),
        Line::raw(format!(" 7 {} Mentor access", check(p.mentor_access))),
    ])
    .block(
        Block::default()
            .title(" Privacy ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(privacy, layout[2]);
}
