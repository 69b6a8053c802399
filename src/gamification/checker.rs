//! Badge eligibility checking
//!
//! Threshold badges are checked against a stat snapshot. Category and
//! special badges need the host's action log and are checked separately.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use super::definitions::{ActionCategory, ActivityRule, BADGES, Badge, SpecialCondition};

/// Badges whose thresholds the given stats meet, in catalog order
///
/// A badge is eligible if *any* of its defined thresholds is met. Axes
/// without a threshold are skipped, and badges with none are never eligible here.
pub fn eligible_badges(points: u64, missions_completed: u32, streak: u32) -> Vec<&'static Badge> {
    BADGES
        .iter()
        .filter(|badge| {
            let t = &badge.thresholds;
            t.points.is_some_and(|required| points >= required)
                || t.missions.is_some_and(|required| missions_completed >= required)
                || t.streak.is_some_and(|required| streak >= required)
        })
        .collect()
}

/// A single logged eco-action, timestamped in the user's local time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcoActionRecord {
    pub category: String,
    pub logged_at: NaiveDateTime,
}

/// The slice of a user's history needed for activity badges
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    pub points: u64,
    pub actions: Vec<EcoActionRecord>,
}

impl ActivityLog {
    fn category_counts(&self) -> HashMap<ActionCategory, u32> {
        let mut counts = HashMap::new();
        for action in &self.actions {
            if let Some(category) = ActionCategory::parse(&action.category) {
                *counts.entry(category).or_insert(0) += 1;
            }
        }
        counts
    }

    fn has_full_weekend(&self) -> bool {
        let days: HashSet<NaiveDate> = self.actions.iter().map(|a| a.logged_at.date()).collect();
        days.iter()
            .filter(|d| d.weekday() == Weekday::Sat)
            .any(|sat| days.contains(&(*sat + Duration::days(1))))
    }

    fn meets_special(&self, condition: SpecialCondition) -> bool {
        match condition {
            SpecialCondition::BeforeHour(hour) => {
                self.actions.iter().any(|a| a.logged_at.hour() < hour)
            }
            SpecialCondition::AfterHour(hour) => {
                self.actions.iter().any(|a| a.logged_at.hour() >= hour)
            }
            SpecialCondition::BothWeekendDays => self.has_full_weekend(),
        }
    }
}

/// Activity badges the log satisfies, in catalog order
pub fn eligible_activity_badges(log: &ActivityLog) -> Vec<&'static Badge> {
    let counts = log.category_counts();

    BADGES
        .iter()
        .filter(|badge| match badge.activity {
            None => false,
            Some(ActivityRule::EcoActions(required)) => log.actions.len() >= required as usize,
            Some(ActivityRule::StarterPoints(required)) => log.points >= required,
            Some(ActivityRule::CategoryActions(category, required)) => {
                counts.get(&category).copied().unwrap_or(0) >= required
            }
            Some(ActivityRule::Special(condition)) => log.meets_special(condition),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamification::definitions::BadgeId;

    fn ids(badges: &[&Badge]) -> Vec<&'static str> {
        badges.iter().map(|b| b.id.as_str()).collect()
    }

    fn action(category: &str, date: (i32, u32, u32), hour: u32) -> EcoActionRecord {
        EcoActionRecord {
            category: category.to_string(),
            logged_at: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_point_threshold_boundary() {
        let badges = ids(&eligible_badges(100, 0, 0));
        assert!(badges.contains(&"eco_novice"));
        assert!(!badges.contains(&"eco_warrior"));
    }

    #[test]
    fn test_nothing_eligible_for_new_user() {
        assert!(eligible_badges(0, 0, 0).is_empty());
    }

    #[test]
    fn test_starter_badges_never_threshold_eligible() {
        let badges = ids(&eligible_badges(u64::MAX, u32::MAX, u32::MAX));
        assert!(!badges.contains(&"first_steps"));
        assert!(!badges.contains(&"getting_started"));
        assert!(!badges.contains(&"recycling_hero"));
        assert_eq!(badges.len(), 12);
    }

    #[test]
    fn test_any_axis_is_enough() {
        let badges = ids(&eligible_badges(0, 10, 7));
        assert_eq!(badges, vec!["mission_starter", "mission_master", "consistent"]);
    }

    #[test]
    fn test_catalog_order_preserved() {
        let badges = eligible_badges(5000, 25, 100);
        let positions: Vec<usize> = badges
            .iter()
            .map(|b| BADGES.iter().position(|c| c.id == b.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_eligibility_is_idempotent() {
        let first = ids(&eligible_badges(1200, 3, 30));
        let second = ids(&eligible_badges(1200, 3, 30));
        assert_eq!(first, second);
    }

    #[test]
    fn test_category_badges_need_five_actions() {
        let mut log = ActivityLog::default();
        for day in 1..=4 {
            log.actions.push(action("recycling", (2024, 3, day), 12));
        }
        let badges = eligible_activity_badges(&log);
        assert!(!badges.iter().any(|b| b.id == BadgeId::RecyclingHero));

        log.actions.push(action("recycling", (2024, 3, 5), 12));
        let badges = eligible_activity_badges(&log);
        assert!(badges.iter().any(|b| b.id == BadgeId::RecyclingHero));
        assert!(badges.iter().any(|b| b.id == BadgeId::FirstSteps));
    }

    #[test]
    fn test_time_of_day_badges() {
        let log = ActivityLog {
            points: 0,
            actions: vec![action("energy", (2024, 3, 4), 7), action("water", (2024, 3, 4), 23)],
        };
        let badges = ids(&eligible_activity_badges(&log));
        assert!(badges.contains(&"early_bird"));
        assert!(badges.contains(&"night_owl"));
        assert!(!badges.contains(&"weekend_warrior"));
    }

    #[test]
    fn test_weekend_needs_both_days_of_same_weekend() {
        // 2024-03-09 is a Saturday, 2024-03-17 the Sunday after next
        let split = ActivityLog {
            points: 0,
            actions: vec![action("nature", (2024, 3, 9), 12), action("nature", (2024, 3, 17), 12)],
        };
        assert!(!ids(&eligible_activity_badges(&split)).contains(&"weekend_warrior"));

        let full = ActivityLog {
            points: 0,
            actions: vec![action("nature", (2024, 3, 9), 12), action("nature", (2024, 3, 10), 12)],
        };
        assert!(ids(&eligible_activity_badges(&full)).contains(&"weekend_warrior"));
    }

    #[test]
    fn test_starter_points_badge() {
        let log = ActivityLog {
            points: 50,
            actions: Vec::new(),
        };
        assert_eq!(ids(&eligible_activity_badges(&log)), vec!["getting_started"]);
    }
}
