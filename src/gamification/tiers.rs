//! Leaderboard tiers and ranking

use serde::{Deserialize, Serialize};

use crate::error::{GamificationError, Result};

/// Cosmetic leaderboard bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardTier {
    Diamond,
    Gold,
    Silver,
    Bronze,
    Iron,
}

/// Inclusive upper rank bound per tier, checked in order
const TIER_BOUNDS: [(u32, LeaderboardTier); 4] = [
    (10, LeaderboardTier::Diamond),
    (50, LeaderboardTier::Gold),
    (100, LeaderboardTier::Silver),
    (500, LeaderboardTier::Bronze),
];

impl LeaderboardTier {
    /// Tier for a 1-based rank; rank 0 is rejected
    pub fn for_rank(rank: u32) -> Result<Self> {
        if rank == 0 {
            return Err(GamificationError::invalid("rank", "ranks are 1-based"));
        }
        Ok(TIER_BOUNDS
            .iter()
            .find(|(bound, _)| rank <= *bound)
            .map(|(_, tier)| *tier)
            .unwrap_or(Self::Iron))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Diamond => "Diamond",
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
            Self::Iron => "Iron",
        }
    }

    /// Theme color token for the presentation layer
    pub fn color_token(&self) -> &'static str {
        match self {
            Self::Diamond => "text-blue-600",
            Self::Gold => "text-yellow-600",
            Self::Silver => "text-gray-600",
            Self::Bronze => "text-orange-600",
            Self::Iron => "text-gray-400",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Diamond => "💎",
            Self::Gold => "🥇",
            Self::Silver => "🥈",
            Self::Bronze => "🥉",
            Self::Iron => "⚪",
        }
    }

    pub fn info(&self) -> TierInfo {
        TierInfo {
            tier: *self,
            name: self.name(),
            color_token: self.color_token(),
            icon: self.icon(),
        }
    }
}

/// Tier descriptor handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierInfo {
    pub tier: LeaderboardTier,
    pub name: &'static str,
    pub color_token: &'static str,
    pub icon: &'static str,
}

/// Tier descriptor for a rank
pub fn tier_for_rank(rank: u32) -> Result<TierInfo> {
    LeaderboardTier::for_rank(rank).map(|t| t.info())
}

/// A user's leaderboard input as supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub name: String,
    pub points: u64,
    pub level: u32,
}

/// An entry with its computed position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub tier: LeaderboardTier,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

/// Sort by points (descending, ties keep input order) and assign 1-based ranks
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries
        .into_iter()
        .zip(1u32..)
        .map(|(entry, rank)| RankedEntry {
            rank,
            // rank starts at 1, so for_rank cannot fail
            tier: LeaderboardTier::for_rank(rank).unwrap_or(LeaderboardTier::Iron),
            entry,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let tier = |rank| LeaderboardTier::for_rank(rank).unwrap();
        assert_eq!(tier(1), LeaderboardTier::Diamond);
        assert_eq!(tier(10), LeaderboardTier::Diamond);
        assert_eq!(tier(11), LeaderboardTier::Gold);
        assert_eq!(tier(50), LeaderboardTier::Gold);
        assert_eq!(tier(51), LeaderboardTier::Silver);
        assert_eq!(tier(100), LeaderboardTier::Silver);
        assert_eq!(tier(500), LeaderboardTier::Bronze);
        assert_eq!(tier(501), LeaderboardTier::Iron);
        assert_eq!(tier(u32::MAX), LeaderboardTier::Iron);
    }

    #[test]
    fn test_rank_zero_rejected() {
        assert!(matches!(
            tier_for_rank(0),
            Err(GamificationError::InvalidInput { field: "rank", .. })
        ));
    }

    #[test]
    fn test_tier_info() {
        let info = tier_for_rank(3).unwrap();
        assert_eq!(info.name, "Diamond");
        assert_eq!(info.icon, "💎");
        assert_eq!(info.color_token, "text-blue-600");
    }

    #[test]
    fn test_rank_entries_sorts_and_keeps_ties_stable() {
        let entry = |id: &str, points| LeaderboardEntry {
            user_id: id.to_string(),
            name: id.to_string(),
            points,
            level: 1,
        };
        let ranked = rank_entries(vec![
            entry("bob", 892),
            entry("carol", 1456),
            entry("alice", 892),
        ]);
        let order: Vec<_> = ranked.iter().map(|r| (r.rank, r.entry.user_id.as_str())).collect();
        assert_eq!(order, vec![(1, "carol"), (2, "bob"), (3, "alice")]);
        assert!(ranked.iter().all(|r| r.tier == LeaderboardTier::Diamond));
    }
}
