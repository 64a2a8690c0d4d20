//! Admin board — in-process usage overview for the admin dashboard screen.
//!
//! Aggregates whatever this session knows about; there is no backend and
//! no cross-user data (single-user app), so the board ships with a demo
//! roster and counts local chat sessions on top of it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{RiskLevel, Trend};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub last_active: String,
    pub mood_trend: Trend,
    pub risk: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageStats {
    pub total_users: usize,
    pub active_users: usize,
    pub chat_sessions: u64,
    pub high_risk_alerts: usize,
}

#[derive(Debug, Clone, Default)]
pub struct AdminBoard {
    users: Vec<UserRecord>,
    chat_sessions: u64,
}

impl AdminBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board pre-filled with the demonstration roster.
    pub fn demo() -> Self {
        let roster = [
            ("Sarah M.", "sarah.m@example.com", true, "2 min ago", Trend::Up, RiskLevel::Low),
            ("Alex K.", "alex.k@example.com", true, "15 min ago", Trend::Flat, RiskLevel::Low),
            ("Jordan P.", "jordan.p@example.com", false, "2 hours ago", Trend::Down, RiskLevel::Medium),
            ("Taylor R.", "taylor.r@example.com", true, "5 min ago", Trend::Up, RiskLevel::Low),
        ];
        let mut board = Self::new();
        for (name, email, active, last_active, mood_trend, risk) in roster {
            board.users.push(UserRecord {
                id: Uuid::new_v4(),
                name: name.to_string(),
                email: email.to_string(),
                active,
                last_active: last_active.to_string(),
                mood_trend,
                risk,
            });
        }
        board
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Count a chat session opened in this process.
    pub fn note_chat_session(&mut self) {
        self.chat_sessions += 1;
    }

    pub fn stats(&self) -> UsageStats {
        UsageStats {
            total_users: self.users.len(),
            active_users: self.users.iter().filter(|u| u.active).count(),
            chat_sessions: self.chat_sessions,
            high_risk_alerts: self
                .users
                .iter()
                .filter(|u| u.risk != RiskLevel::Low)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_stats() {
        let board = AdminBoard::demo();
        let stats = board.stats();
        assert_eq!(stats.total_users, 4);
        assert_eq!(stats.active_users, 3);
        assert_eq!(stats.high_risk_alerts, 1);
        assert_eq!(stats.chat_sessions, 0);
    }

    #[test]
    fn test_chat_sessions_count_up() {
        let mut board = AdminBoard::new();
        board.note_chat_session();
        board.note_chat_session();
        assert_eq!(board.stats().chat_sessions, 2);
    }
}
