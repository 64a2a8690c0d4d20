//! Core types — Message, Sender, SessionState, tracker and content records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Session state ──

/// Whether the companion is composing a reply. `AwaitingReply` is the
/// "typing indicator on" state; input is refused while in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    AwaitingReply,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::AwaitingReply => write!(f, "awaiting_reply"),
        }
    }
}

// ── Messages ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Assistant => write!(f, "assistant"),
        }
    }
}

/// One transcript entry. Immutable once appended; ids are strictly
/// increasing within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

// ── Event payloads ──

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingData {
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatus {
    pub state: SessionState,
    pub message_count: usize,
}

// ── Trends & risk (tracker / admin) ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Flat => write!(f, "flat"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

// ── Content records (dashboard / onboarding) ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Mindfulness,
    Reflection,
    Physical,
}

#[derive(Debug, Clone)]
pub struct DailyTip {
    pub title: &'static str,
    pub description: &'static str,
    pub category: TipCategory,
}

/// One entry of the dashboard quick mood check.
#[derive(Debug, Clone)]
pub struct MoodOption {
    pub emoji: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone)]
pub struct OnboardingStep {
    pub title: &'static str,
    pub description: &'static str,
}
