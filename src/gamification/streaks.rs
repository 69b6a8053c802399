//! Streak tracking
//!
//! Consecutive-day activity streaks. `today` is always passed in, so these
//! are pure and the host decides what "today" means for the user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Streak lengths that trigger a milestone notification
pub const STREAK_MILESTONES: [u32; 3] = [7, 30, 100];

/// Streak state as the host persists it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakInfo {
    pub current: u32,
    pub best: u32,
    pub last_activity_day: Option<NaiveDate>,
}

/// Result of recording a day's activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakUpdate {
    /// Activity was already counted today
    Unchanged,
    Extended(u32),
    /// Gap of more than a day; streak restarted at 1
    Reset,
}

impl StreakInfo {
    /// Active if the last activity was today or yesterday
    pub fn is_active(&self, today: NaiveDate) -> bool {
        let Some(last) = self.last_activity_day else {
            return false;
        };
        let days_since = (today - last).num_days();
        (0..=1).contains(&days_since)
    }

    /// The streak length to display today (0 once it has lapsed)
    pub fn effective(&self, today: NaiveDate) -> u32 {
        if self.is_active(today) { self.current } else { 0 }
    }

    /// Count activity on `today`, returning the new state and what changed
    pub fn record_activity(&self, today: NaiveDate) -> (StreakInfo, StreakUpdate) {
        let days_since = self.last_activity_day.map(|last| (today - last).num_days());

        let (current, update) = match days_since {
            Some(d) if d <= 0 => return (*self, StreakUpdate::Unchanged),
            Some(1) => {
                let extended = self.current + 1;
                (extended, StreakUpdate::Extended(extended))
            }
            Some(_) => (1, StreakUpdate::Reset),
            None => (1, StreakUpdate::Extended(1)),
        };

        let next = StreakInfo {
            current,
            best: self.best.max(current),
            last_activity_day: Some(today),
        };
        (next, update)
    }
}

/// Milestone crossed when a streak grows from `before` to `after`, if any
pub fn crossed_milestone(before: u32, after: u32) -> Option<u32> {
    STREAK_MILESTONES
        .iter()
        .rev()
        .copied()
        .find(|m| before < *m && after >= *m)
}

/// Encouragement bucket for a streak length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakMood {
    NotStarted,
    JustStarted,
    Building,
    OnFire,
    Legendary,
}

impl StreakMood {
    pub fn for_streak(streak: u32) -> Self {
        match streak {
            0 => Self::NotStarted,
            1 => Self::JustStarted,
            2..=6 => Self::Building,
            7..=29 => Self::OnFire,
            _ => Self::Legendary,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NotStarted => "Start your streak today!",
            Self::JustStarted => "Great start! Keep it up!",
            Self::Building => "Building momentum!",
            Self::OnFire => "You're on fire! 🔥",
            Self::Legendary => "Legendary streak! 🏆",
        }
    }

    /// "Hot streak" highlight from a week onward
    pub fn is_hot(&self) -> bool {
        matches!(self, Self::OnFire | Self::Legendary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    #[test]
    fn test_active_today_or_yesterday() {
        let streak = StreakInfo {
            current: 4,
            best: 4,
            last_activity_day: Some(day(10)),
        };
        assert!(streak.is_active(day(10)));
        assert!(streak.is_active(day(11)));
        assert!(!streak.is_active(day(12)));
        assert_eq!(streak.effective(day(12)), 0);
        assert!(!StreakInfo::default().is_active(day(1)));
    }

    #[test]
    fn test_record_activity_extends_and_resets() {
        let start = StreakInfo::default();
        let (s1, u1) = start.record_activity(day(1));
        assert_eq!(u1, StreakUpdate::Extended(1));

        let (same, u_same) = s1.record_activity(day(1));
        assert_eq!(u_same, StreakUpdate::Unchanged);
        assert_eq!(same, s1);

        let (s2, u2) = s1.record_activity(day(2));
        assert_eq!(u2, StreakUpdate::Extended(2));

        let (s3, u3) = s2.record_activity(day(5));
        assert_eq!(u3, StreakUpdate::Reset);
        assert_eq!(s3.current, 1);
        assert_eq!(s3.best, 2);
    }

    #[test]
    fn test_crossed_milestone() {
        assert_eq!(crossed_milestone(6, 7), Some(7));
        assert_eq!(crossed_milestone(7, 8), None);
        assert_eq!(crossed_milestone(29, 30), Some(30));
        assert_eq!(crossed_milestone(0, 120), Some(100));
    }

    #[test]
    fn test_mood_buckets() {
        assert_eq!(StreakMood::for_streak(0).message(), "Start your streak today!");
        assert_eq!(StreakMood::for_streak(6), StreakMood::Building);
        assert!(StreakMood::for_streak(7).is_hot());
        assert_eq!(StreakMood::for_streak(30), StreakMood::Legendary);
    }
}
