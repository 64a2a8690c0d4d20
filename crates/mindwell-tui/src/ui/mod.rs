//! TUI layout compositing — routes drawing to the active screen.

mod admin;
mod chat;
mod dashboard;
mod input;
mod onboarding;
mod profile;
mod splash;
mod status;
mod tracker;

use ratatui::prelude::*;

use crate::app::{App, Screen};

/// Render the full TUI layout.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.screen == Screen::Splash {
        splash::draw(frame, area);
        return;
    }

    // ┌──────────────────────────────────┐
    // │ Screen content                   │
    // ├──────────────────────────────────┤
    // │ Status bar (+ toast)             │
    // ├──────────────────────────────────┤
    // │ Input (chat screen only)         │
    // └──────────────────────────────────┘

    let constraints = if app.screen == Screen::Chat {
        vec![
            Constraint::Min(10),    // content
            Constraint::Length(1),  // status
            Constraint::Length(3),  // input
        ]
    } else {
        vec![Constraint::Min(10), Constraint::Length(1)]
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    match app.screen {
        Screen::Splash => unreachable!("handled above"),
        Screen::Onboarding => onboarding::draw(frame, app, layout[0]),
        Screen::Dashboard => dashboard::draw(frame, app, layout[0]),
        Screen::Chat => chat::draw(frame, app, layout[0]),
        Screen::Tracker => tracker::draw(frame, app, layout[0]),
        Screen::Profile => profile::draw(frame, app, layout[0]),
        Screen::Admin => admin::draw(frame, app, layout[0]),
    }

    status::draw(frame, app, layout[1]);

    if app.screen == Screen::Chat {
        input::draw(frame, app, layout[2]);
    }
}
