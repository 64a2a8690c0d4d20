//! Profile & settings — account fields plus notification and privacy toggles.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub age: String,
    pub gender: String,
    pub role: String,
}

impl UserProfile {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            age: "19".to_string(),
            gender: "prefer-not-to-say".to_string(),
            role: "student".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub daily_tips: bool,
    pub mood_reminders: bool,
    pub chat_messages: bool,
    pub weekly_reports: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            daily_tips: true,
            mood_reminders: true,
            chat_messages: true,
            weekly_reports: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacyPrefs {
    pub share_progress: bool,
    pub anonymous_data: bool,
    pub mentor_access: bool,
}

impl Default for PrivacyPrefs {
    fn default() -> Self {
        Self {
            share_progress: false,
            anonymous_data: true,
            mentor_access: true,
        }
    }
}

/// Flip a toggle and return the new value, so the frontend can announce it.
pub fn toggle(flag: &mut bool) -> bool {
    *flag = !*flag;
    *flag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_app() {
        let n = NotificationPrefs::default();
        assert!(n.daily_tips && n.mood_reminders && n.chat_messages);
        assert!(!n.weekly_reports);

        let p = PrivacyPrefs::default();
        assert!(!p.share_progress);
        assert!(p.anonymous_data && p.mentor_access);
    }

    #[test]
    fn test_toggle_returns_new_value() {
        let mut prefs = NotificationPrefs::default();
        assert!(!toggle(&mut prefs.daily_tips));
        assert!(toggle(&mut prefs.daily_tips));
    }
}
