//! Gamification engines: Levels, Multipliers, Badges, Tiers, Streaks,
//! Challenges and Notifications
//!
//! Everything here is a pure function of its inputs except challenge
//! generation and notification stamping, which read the injected
//! [`Clock`] and [`RandomSource`].

mod challenges;
mod checker;
mod dashboard;
mod definitions;
mod effects;
mod events;
mod ledger;
mod levels;
mod multiplier;
mod notifications;
mod stats;
mod streaks;
mod tiers;

pub use challenges::{
    Challenge, ChallengeGenerator, ChallengeTemplate, ChallengeType, DAILY_TEMPLATES,
};
pub use checker::{ActivityLog, EcoActionRecord, eligible_activity_badges, eligible_badges};
pub use dashboard::DashboardState;
pub use definitions::{
    ActionCategory, ActivityRule, BADGES, Badge, BadgeCategory, BadgeId, Rarity, SpecialCondition,
    Thresholds,
};
pub use effects::{
    Clock, FixedClock, OsRandom, RandomSource, SequenceRandom, SystemClock, TickingClock,
};
pub use events::{GamificationEvent, LevelUp, NotificationBus, detect_events};
pub use ledger::{BadgePartition, ShowcaseLimits, ShowcaseMode, granted_set, showcase};
pub use levels::{LevelInfo, level_for_points, points_required_for_level};
pub use multiplier::{Multiplier, multiplier};
pub use notifications::{
    AchievementNotification, DEFAULT_BADGE_ICON, NotificationFactory, NotificationKind,
    NotificationPayload,
};
pub use stats::{RawUserStats, UserStats};
pub use streaks::{STREAK_MILESTONES, StreakInfo, StreakMood, StreakUpdate, crossed_milestone};
pub use tiers::{
    LeaderboardEntry, LeaderboardTier, RankedEntry, TierInfo, rank_entries, tier_for_rank,
};
