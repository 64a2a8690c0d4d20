//! Mood & stress tracker — per-day ratings, weekly stats, derived insights.
//!
//! Ratings are 1-10, one mood and one stress value per day, latest log
//! wins. Nothing is persisted; the tracker lives for the session.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::types::Trend;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("rating {0} out of range (expected 1-10)")]
    RatingOutOfRange(u8),
}

/// One day of the tracked week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: String,
    pub mood: Option<u8>,
    pub stress: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyStats {
    pub avg_mood: f64,
    pub avg_stress: f64,
    pub mood_trend: Trend,
    pub stress_trend: Trend,
}

#[derive(Debug, Clone)]
pub struct Insight {
    pub title: &'static str,
    pub description: &'static str,
}

/// Colour band for rendering a rating bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Great,
    Good,
    Warn,
    Bad,
}

/// Higher mood is better.
pub fn mood_band(value: u8) -> Band {
    match value {
        8..=10 => Band::Great,
        6..=7 => Band::Good,
        4..=5 => Band::Warn,
        _ => Band::Bad,
    }
}

/// Lower stress is better.
pub fn stress_band(value: u8) -> Band {
    match value {
        0..=3 => Band::Great,
        4..=5 => Band::Good,
        6..=7 => Band::Warn,
        _ => Band::Bad,
    }
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Session-local mood/stress log over a Mon..Sun week.
#[derive(Debug, Clone)]
pub struct MoodTracker {
    days: Vec<DayRecord>,
}

impl MoodTracker {
    /// An empty week, nothing logged yet.
    pub fn new() -> Self {
        Self {
            days: WEEK
                .iter()
                .map(|d| DayRecord {
                    day: day_label(*d),
                    mood: None,
                    stress: None,
                })
                .collect(),
        }
    }

    /// A week pre-filled with demonstration data, so a fresh session has
    /// an overview to show.
    pub fn demo_week() -> Self {
        let mut tracker = Self::new();
        let seed: [(u8, u8); 7] = [(7, 4), (6, 6), (8, 3), (5, 7), (9, 2), (8, 3), (7, 4)];
        for (record, (mood, stress)) in tracker.days.iter_mut().zip(seed) {
            record.mood = Some(mood);
            record.stress = Some(stress);
        }
        tracker
    }

    pub fn week(&self) -> &[DayRecord] {
        &self.days
    }

    /// Log today's mood. Latest log for a day wins.
    pub fn log_mood(&mut self, day: Weekday, rating: u8) -> Result<(), TrackerError> {
        validate(rating)?;
        self.day_mut(day).mood = Some(rating);
        info!("mood logged: {}/10", rating);
        Ok(())
    }

    /// Log today's stress level. Latest log for a day wins.
    pub fn log_stress(&mut self, day: Weekday, rating: u8) -> Result<(), TrackerError> {
        validate(rating)?;
        self.day_mut(day).stress = Some(rating);
        info!("stress logged: {}/10", rating);
        Ok(())
    }

    fn day_mut(&mut self, day: Weekday) -> &mut DayRecord {
        let idx = WEEK.iter().position(|d| *d == day).expect("weekday");
        &mut self.days[idx]
    }

    /// Averages (1 decimal) and half-week trends over whatever is logged.
    pub fn weekly_stats(&self) -> WeeklyStats {
        let moods: Vec<f64> = self.days.iter().filter_map(|d| d.mood).map(f64::from).collect();
        let stresses: Vec<f64> = self.days.iter().filter_map(|d| d.stress).map(f64::from).collect();

        WeeklyStats {
            avg_mood: round1(mean(&moods)),
            avg_stress: round1(mean(&stresses)),
            mood_trend: trend(&moods),
            stress_trend: trend(&stresses),
        }
    }

    /// Insights derived from the logged week, in the app's voice.
    pub fn insights(&self) -> Vec<Insight> {
        let stats = self.weekly_stats();
        let mut out = Vec::new();

        if stats.mood_trend == Trend::Up {
            out.push(Insight {
                title: "Mood Improving",
                description: "Your mood has been trending upward over the past week. \
                    Keep up the great work!",
            });
        }
        if (3.0..=6.0).contains(&stats.avg_stress) {
            out.push(Insight {
                title: "Stress Management",
                description: "Your stress levels are moderate. Consider trying some \
                    mindfulness exercises.",
            });
        }
        if self.weekend_mood() > self.weekday_mood() {
            out.push(Insight {
                title: "Weekend Boost",
                description: "You tend to feel better on weekends. What activities \
                    bring you joy?",
            });
        }
        out
    }

    fn weekday_mood(&self) -> f64 {
        let vals: Vec<f64> = self.days[..5].iter().filter_map(|d| d.mood).map(f64::from).collect();
        mean(&vals)
    }

    fn weekend_mood(&self) -> f64 {
        let vals: Vec<f64> = self.days[5..].iter().filter_map(|d| d.mood).map(f64::from).collect();
        mean(&vals)
    }
}

impl Default for MoodTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(rating: u8) -> Result<(), TrackerError> {
    if (1..=10).contains(&rating) {
        Ok(())
    } else {
        Err(TrackerError::RatingOutOfRange(rating))
    }
}

fn day_label(day: Weekday) -> String {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
    .to_string()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Compare the mean of the second half of the series to the first half.
fn trend(values: &[f64]) -> Trend {
    if values.len() < 2 {
        return Trend::Flat;
    }
    let half = values.len() / 2;
    let early = mean(&values[..half]);
    let late = mean(&values[values.len() - half..]);
    let diff = late - early;
    if diff > 0.5 {
        Trend::Up
    } else if diff < -0.5 {
        Trend::Down
    } else {
        Trend::Flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        let mut tracker = MoodTracker::new();
        assert_eq!(
            tracker.log_mood(Weekday::Mon, 0),
            Err(TrackerError::RatingOutOfRange(0))
        );
        assert_eq!(
            tracker.log_stress(Weekday::Mon, 11),
            Err(TrackerError::RatingOutOfRange(11))
        );
        assert!(tracker.log_mood(Weekday::Mon, 1).is_ok());
        assert!(tracker.log_mood(Weekday::Mon, 10).is_ok());
    }

    #[test]
    fn test_latest_log_wins() {
        let mut tracker = MoodTracker::new();
        tracker.log_mood(Weekday::Wed, 3).unwrap();
        tracker.log_mood(Weekday::Wed, 8).unwrap();
        assert_eq!(tracker.week()[2].mood, Some(8));
    }

    #[test]
    fn test_demo_week_stats() {
        let stats = MoodTracker::demo_week().weekly_stats();
        assert_eq!(stats.avg_mood, 7.1);
        assert_eq!(stats.avg_stress, 4.1);
        assert_eq!(stats.mood_trend, Trend::Up);
        assert_eq!(stats.stress_trend, Trend::Down);
    }

    #[test]
    fn test_empty_week_is_flat() {
        let stats = MoodTracker::new().weekly_stats();
        assert_eq!(stats.avg_mood, 0.0);
        assert_eq!(stats.mood_trend, Trend::Flat);
        assert!(MoodTracker::new().insights().is_empty());
    }

    #[test]
    fn test_demo_week_insights() {
        let insights = MoodTracker::demo_week().insights();
        let titles: Vec<&str> = insights.iter().map(|i| i.title).collect();
        assert!(titles.contains(&"Mood Improving"));
        assert!(titles.contains(&"Stress Management"));
        assert!(titles.contains(&"Weekend Boost"));
    }

    #[test]
    fn test_bands() {
        assert_eq!(mood_band(9), Band::Great);
        assert_eq!(mood_band(3), Band::Bad);
        assert_eq!(stress_band(2), Band::Great);
        assert_eq!(stress_band(9), Band::Bad);
    }
}
