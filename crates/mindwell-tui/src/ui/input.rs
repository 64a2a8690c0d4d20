//! Chat input bar. Greyed out while the companion is typing.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.typing {
        Color::DarkGray
    } else if app.input_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let title = if app.typing {
        " Waiting for reply... "
    } else {
        " Share what's on your mind (Enter to send, Esc for dashboard) "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = Paragraph::new(app.input.as_str()).style(Style::default().fg(Color::White));
    frame.render_widget(input, inner);

    // Show cursor
    if app.input_focused && !app.typing {
        frame.set_cursor_position(Position::new(
            inner.x + app.input.len() as u16,
            inner.y,
        ));
    }
}
