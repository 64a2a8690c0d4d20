//! mindwell-tui — Terminal UI for the MindWell wellness companion.
//! Uses Ratatui + Crossterm for rendering.

mod app;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;

use mindwell_core::config::Config;
use mindwell_core::conversation::{ChatCommand, Conversation};

use app::{App, Screen, TrackerTarget};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing to a file (not stdout, since we own the terminal)
    let _guard = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(|| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open("mindwell-tui.log")
                .unwrap_or_else(|_| {
                    // Fallback: /dev/null
                    std::fs::File::open("/dev/null").unwrap()
                })
        })
        .try_init();

    let project_root = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let config = Config::load_from_dir(&project_root).unwrap_or_default();

    // One conversation per session; the engine runs as its own task and
    // the UI mirrors it through the broadcast channel.
    let mut conversation = Conversation::new(&config);
    let mut events_rx = conversation.subscribe();
    let command_tx = conversation.command_sender();
    let seeded = conversation.transcript().to_vec();
    let engine = tokio::spawn(async move { conversation.run().await });

    let mut app = App::new(config, seeded, command_tx);
    info!("starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Handle conversation events (non-blocking)
        while let Ok(chat_event) = events_rx.try_recv() {
            app.handle_event(chat_event);
        }

        // Splash auto-advance
        if app.screen == Screen::Splash
            && app.splash_since.elapsed() >= Duration::from_millis(app.config.splash_ms)
        {
            app.go_to(Screen::Onboarding);
        }

        // Handle terminal events
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    // Quit
                    (KeyCode::Char('c'), KeyModifiers::CONTROL)
                    | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    _ => handle_key(&mut app, key.code).await,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Cleanup
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    // Stop the conversation — cancels any pending reply.
    let _ = app.command_tx.send(ChatCommand::Stop).await;
    let _ = engine.await;

    Ok(())
}

/// Screen-local key routing.
async fn handle_key(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Splash => {
            // Any key skips the splash
            app.go_to(Screen::Onboarding);
        }
        Screen::Onboarding => match code {
            KeyCode::Enter | KeyCode::Right => app.next_onboarding_step(),
            KeyCode::Left => app.prev_onboarding_step(),
            KeyCode::Char('s') => app.go_to(Screen::Dashboard),
            _ => {}
        },
        Screen::Dashboard => match code {
            KeyCode::Char(c @ '1'..='5') => {
                app.select_quick_mood(c as usize - '1' as usize);
            }
            KeyCode::Char('c') => app.go_to(Screen::Chat),
            KeyCode::Char('t') => app.go_to(Screen::Tracker),
            KeyCode::Char('p') => app.go_to(Screen::Profile),
            KeyCode::Char('a') => app.go_to(Screen::Admin),
            _ => {}
        },
        Screen::Chat => match code {
            KeyCode::Esc => app.go_to(Screen::Dashboard),
            KeyCode::Tab => app.input_focused = !app.input_focused,
            KeyCode::Enter if app.input_focused => app.send_message().await,
            KeyCode::Char(c) if app.input_focused => app.input.push(c),
            KeyCode::Backspace if app.input_focused => {
                app.input.pop();
            }
            KeyCode::Char(c @ '1'..='4') => {
                app.send_quick_response(c as usize - '1' as usize).await;
            }
            KeyCode::Up => app.scroll_up(),
            KeyCode::Down => app.scroll_down(),
            _ => {}
        },
        Screen::Tracker => match code {
            KeyCode::Esc => app.go_to(Screen::Dashboard),
            KeyCode::Char('m') => app.tracker_target = TrackerTarget::Mood,
            KeyCode::Char('s') => app.tracker_target = TrackerTarget::Stress,
            KeyCode::Char('0') => app.log_rating(10),
            KeyCode::Char(c @ '1'..='9') => {
                app.log_rating(c as u8 - b'0');
            }
            _ => {}
        },
        Screen::Profile => match code {
            KeyCode::Esc => app.go_to(Screen::Dashboard),
            KeyCode::Char(c @ '1'..='7') => {
                app.toggle_setting(c as usize - '1' as usize);
            }
            _ => {}
        },
        Screen::Admin => {
            if code == KeyCode::Esc {
                app.go_to(Screen::Dashboard);
            }
        }
    }
}
