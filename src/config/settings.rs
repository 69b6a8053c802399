//! Settings sections of the EcoHunt config

use serde::{Deserialize, Serialize};

use crate::gamification::{DEFAULT_BADGE_ICON, ShowcaseLimits};

/// Daily challenge settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeSettings {
    /// How many daily challenges to offer per day
    #[serde(default = "default_daily_count")]
    pub daily_count: usize,

    /// Never offer the same template twice in one day's set
    /// When false (default), repeats are allowed, matching independent draws
    #[serde(default)]
    pub distinct_templates: bool,
}

impl Default for ChallengeSettings {
    fn default() -> Self {
        Self {
            daily_count: default_daily_count(),
            distinct_templates: false,
        }
    }
}

fn default_daily_count() -> usize {
    3
}

/// How many badges the badge showcase displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseSettings {
    #[serde(default = "default_compact_earned")]
    pub compact_earned: usize,
    #[serde(default = "default_compact_available")]
    pub compact_available: usize,
    #[serde(default = "default_earned_limit")]
    pub earned_limit: usize,
    #[serde(default = "default_available_limit")]
    pub available_limit: usize,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            compact_earned: default_compact_earned(),
            compact_available: default_compact_available(),
            earned_limit: default_earned_limit(),
            available_limit: default_available_limit(),
        }
    }
}

impl ShowcaseSettings {
    pub fn limits(&self) -> ShowcaseLimits {
        ShowcaseLimits {
            compact: (self.compact_earned, self.compact_available),
            default: (self.earned_limit, self.available_limit),
        }
    }
}

fn default_compact_earned() -> usize {
    3
}

fn default_compact_available() -> usize {
    2
}

fn default_earned_limit() -> usize {
    6
}

fn default_available_limit() -> usize {
    3
}

/// Notification rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Icon for badge notifications whose badge has none
    #[serde(default = "default_badge_icon")]
    pub default_badge_icon: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            default_badge_icon: default_badge_icon(),
        }
    }
}

fn default_badge_icon() -> String {
    DEFAULT_BADGE_ICON.to_string()
}
