//! App state, screen routing, input handling.

use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use tracing::warn;

use mindwell_core::admin::AdminBoard;
use mindwell_core::config::Config;
use mindwell_core::conversation::ChatCommand;
use mindwell_core::events::ChatEvent;
use mindwell_core::profile::{toggle, NotificationPrefs, PrivacyPrefs, UserProfile};
use mindwell_core::tracker::MoodTracker;
use mindwell_core::types::Message;
use mindwell_core::wellness::MOOD_OPTIONS;

const TOAST_DURATION: Duration = Duration::from_millis(2500);

/// The screens of the app, one per page of the mobile original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Onboarding,
    Dashboard,
    Chat,
    Tracker,
    Profile,
    Admin,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Splash => "MindWell",
            Screen::Onboarding => "Welcome",
            Screen::Dashboard => "Dashboard",
            Screen::Chat => "AI Wellness Companion",
            Screen::Tracker => "Mood & Stress Tracker",
            Screen::Profile => "Profile & Settings",
            Screen::Admin => "Admin Dashboard",
        }
    }
}

/// Which rating the tracker screen's digit keys log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerTarget {
    Mood,
    Stress,
}

/// The main application state.
pub struct App {
    pub config: Config,
    pub screen: Screen,
    pub should_quit: bool,

    // Chat feed mirror, built from ChatEvents.
    pub messages: Vec<Message>,
    pub typing: bool,
    pub input: String,
    pub input_focused: bool,
    pub scroll_offset: usize,
    pub command_tx: tokio::sync::mpsc::Sender<ChatCommand>,

    // Other screens.
    pub tracker: MoodTracker,
    pub tracker_target: TrackerTarget,
    pub profile: UserProfile,
    pub notifications: NotificationPrefs,
    pub privacy: PrivacyPrefs,
    pub admin: AdminBoard,
    pub onboarding_step: usize,
    pub quick_mood: Option<usize>,

    pub splash_since: Instant,
    toast: Option<(String, Instant)>,
}

impl App {
    pub fn new(
        config: Config,
        seeded_transcript: Vec<Message>,
        command_tx: tokio::sync::mpsc::Sender<ChatCommand>,
    ) -> Self {
        let user_name = config.user_name.clone();
        App {
            config,
            screen: Screen::Splash,
            should_quit: false,
            messages: seeded_transcript,
            typing: false,
            input: String::new(),
            input_focused: true,
            scroll_offset: 0,
            command_tx,
            tracker: MoodTracker::demo_week(),
            tracker_target: TrackerTarget::Mood,
            profile: UserProfile::new(&user_name),
            notifications: NotificationPrefs::default(),
            privacy: PrivacyPrefs::default(),
            admin: AdminBoard::demo(),
            onboarding_step: 0,
            quick_mood: None,
            splash_since: Instant::now(),
            toast: None,
        }
    }

    // ── Chat ──

    /// Apply a conversation event to the feed mirror.
    pub fn handle_event(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Message(message) => {
                self.messages.push(message);
                // Auto-scroll to bottom
                self.scroll_offset = 0;
            }
            ChatEvent::Typing(data) => {
                self.typing = data.active;
            }
            ChatEvent::Status(_) => {}
        }
    }

    /// Send the input buffer to the conversation. The engine enforces the
    /// same guards; refusing here just mirrors the original's disabled input.
    pub async fn send_message(&mut self) {
        if self.input.trim().is_empty() || self.typing {
            return;
        }
        let text = std::mem::take(&mut self.input);
        self.send_text(text).await;
    }

    /// Submit one of the pre-canned quick responses unchanged.
    pub async fn send_quick_response(&mut self, index: usize) {
        if self.typing {
            return;
        }
        if let Some(text) = mindwell_core::responder::QUICK_RESPONSES.get(index) {
            self.send_text(text.to_string()).await;
        }
    }

    async fn send_text(&mut self, text: String) {
        if self
            .command_tx
            .send(ChatCommand::UserMessage(text))
            .await
            .is_err()
        {
            warn!("conversation task is gone");
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(3);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(3);
    }

    // ── Navigation ──

    pub fn go_to(&mut self, screen: Screen) {
        if screen == Screen::Admin && !self.config.admin_enabled {
            self.toast("Admin dashboard is disabled");
            return;
        }
        if screen == Screen::Chat && self.screen != Screen::Chat {
            self.admin.note_chat_session();
        }
        self.screen = screen;
    }

    pub fn next_onboarding_step(&mut self) {
        let steps = mindwell_core::wellness::ONBOARDING_STEPS.len();
        if self.onboarding_step + 1 < steps {
            self.onboarding_step += 1;
        } else {
            self.go_to(Screen::Dashboard);
        }
    }

    pub fn prev_onboarding_step(&mut self) {
        self.onboarding_step = self.onboarding_step.saturating_sub(1);
    }

    // ── Dashboard ──

    pub fn select_quick_mood(&mut self, index: usize) {
        if let Some(option) = MOOD_OPTIONS.get(index) {
            self.quick_mood = Some(index);
            self.toast(format!("Mood logged: {}", option.value));
        }
    }

    // ── Tracker ──

    pub fn log_rating(&mut self, rating: u8) {
        let today = Local::now().date_naive().weekday();
        let result = match self.tracker_target {
            TrackerTarget::Mood => self.tracker.log_mood(today, rating),
            TrackerTarget::Stress => self.tracker.log_stress(today, rating),
        };
        match (result, self.tracker_target) {
            (Ok(()), TrackerTarget::Mood) => self.toast(format!("Mood logged: {}/10", rating)),
            (Ok(()), TrackerTarget::Stress) => {
                self.toast(format!("Stress level logged: {}/10", rating))
            }
            (Err(e), _) => self.toast(e.to_string()),
        }
    }

    // ── Profile ──

    pub fn toggle_setting(&mut self, index: usize) {
        let (label, value) = match index {
            0 => ("Daily tips", toggle(&mut self.notifications.daily_tips)),
            1 => ("Mood reminders", toggle(&mut self.notifications.mood_reminders)),
            2 => ("Chat messages", toggle(&mut self.notifications.chat_messages)),
            3 => ("Weekly reports", toggle(&mut self.notifications.weekly_reports)),
            4 => ("Share progress", toggle(&mut self.privacy.share_progress)),
            5 => ("Anonymous data", toggle(&mut self.privacy.anonymous_data)),
            6 => ("Mentor access", toggle(&mut self.privacy.mentor_access)),
            _ => return,
        };
        self.toast(format!(
            "{} {}",
            label,
            if value { "enabled" } else { "disabled" }
        ));
    }

    // ── Toast ──

    pub fn toast(&mut self, text: impl Into<String>) {
        self.toast = Some((text.into(), Instant::now()));
    }

    /// The toast line, if one is still showing.
    pub fn active_toast(&self) -> Option<&str> {
        match &self.toast {
            Some((text, since)) if since.elapsed() < TOAST_DURATION => Some(text),
            _ => None,
        }
    }
}
