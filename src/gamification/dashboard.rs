//! Dashboard state: everything derived from one stat snapshot

use serde::Serialize;

use super::checker::eligible_badges;
use super::definitions::Badge;
use super::levels::LevelInfo;
use super::multiplier::Multiplier;
use super::stats::UserStats;
use super::streaks::StreakMood;
use super::tiers::{TierInfo, tier_for_rank};
use crate::error::Result;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub stats: UserStats,
    pub level: LevelInfo,
    pub multiplier: Multiplier,
    pub streak_mood: StreakMood,
    pub eligible_badges: Vec<&'static Badge>,
    /// `None` for unranked users
    pub tier: Option<TierInfo>,
}

impl DashboardState {
    pub fn evaluate(stats: &UserStats) -> Result<Self> {
        let level = LevelInfo::for_points(stats.points);
        let tier = stats.rank.map(tier_for_rank).transpose()?;

        Ok(Self {
            stats: *stats,
            level,
            multiplier: Multiplier::for_streak_and_level(stats.streak, level.current_level),
            streak_mood: StreakMood::for_streak(stats.streak),
            eligible_badges: eligible_badges(
                stats.points,
                stats.missions_completed,
                stats.streak,
            ),
            tier,
        })
    }
}
