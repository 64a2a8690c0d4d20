//! Curated wellness content — daily tips, mood check options, onboarding copy.

use chrono::{Datelike, NaiveDate};

use crate::types::{DailyTip, MoodOption, OnboardingStep, TipCategory};

pub const DAILY_TIPS: &[DailyTip] = &[
    DailyTip {
        title: "Mindful Breathing",
        description: "Take 5 deep breaths to center yourself",
        category: TipCategory::Mindfulness,
    },
    DailyTip {
        title: "Gratitude Practice",
        description: "Write down 3 things you're grateful for today",
        category: TipCategory::Reflection,
    },
    DailyTip {
        title: "Quick Movement",
        description: "Do 10 jumping jacks to boost your energy",
        category: TipCategory::Physical,
    },
];

pub const MOOD_OPTIONS: &[MoodOption] = &[
    MoodOption { emoji: "😊", label: "Great", value: "great" },
    MoodOption { emoji: "🙂", label: "Good", value: "good" },
    MoodOption { emoji: "😐", label: "Okay", value: "okay" },
    MoodOption { emoji: "😔", label: "Low", value: "low" },
    MoodOption { emoji: "😰", label: "Stressed", value: "stressed" },
];

pub const ONBOARDING_STEPS: &[OnboardingStep] = &[
    OnboardingStep {
        title: "AI-Powered Support",
        description: "Get personalized emotional guidance from our empathetic AI \
            companion, available 24/7 to listen and help.",
    },
    OnboardingStep {
        title: "Daily Wellness Tips",
        description: "Receive curated daily tips and mindfulness exercises tailored \
            to your emotional needs and goals.",
    },
    OnboardingStep {
        title: "Mood & Stress Tracking",
        description: "Monitor your emotional patterns with visual charts and insights \
            to understand your mental wellness journey.",
    },
    OnboardingStep {
        title: "Journaling & Reflection",
        description: "Express your thoughts safely through guided journaling and \
            receive AI insights on your emotional patterns.",
    },
];

/// Rotate through the tips by date — same tip all day, next tip tomorrow.
pub fn tip_of_the_day(date: NaiveDate) -> &'static DailyTip {
    let idx = date.num_days_from_ce() as usize % DAILY_TIPS.len();
    &DAILY_TIPS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_rotation_is_daily_and_stable() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let tip = tip_of_the_day(day);
        assert_eq!(tip.title, tip_of_the_day(day).title);

        let next = tip_of_the_day(day.succ_opt().unwrap());
        assert_ne!(tip.title, next.title);
    }

    #[test]
    fn test_content_tables_nonempty() {
        assert_eq!(DAILY_TIPS.len(), 3);
        assert_eq!(MOOD_OPTIONS.len(), 5);
        assert_eq!(ONBOARDING_STEPS.len(), 4);
    }
}
