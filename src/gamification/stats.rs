//! User stat snapshots supplied by the host application
//!
//! The engines only read these; persistence and mutation belong to the host.

use serde::{Deserialize, Serialize};

use crate::error::{GamificationError, Result};

/// Validated stat snapshot. Unsigned fields make negative values unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub points: u64,
    pub missions_completed: u32,
    pub eco_actions: u32,
    pub streak: u32,
    /// 1-based leaderboard position, if the user is ranked
    pub rank: Option<u32>,
}

/// Stat snapshot as the host stores it (signed, possibly malformed)
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserStats {
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub missions_completed: i64,
    #[serde(default)]
    pub eco_actions: i64,
    #[serde(default)]
    pub streak: i64,
    #[serde(default)]
    pub rank: Option<i64>,
}

fn non_negative_u32(field: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(GamificationError::invalid(
            field,
            format!("must be non-negative, got {value}"),
        ));
    }
    u32::try_from(value)
        .map_err(|_| GamificationError::invalid(field, format!("{value} is out of range")))
}

impl TryFrom<RawUserStats> for UserStats {
    type Error = GamificationError;

    fn try_from(raw: RawUserStats) -> Result<Self> {
        if raw.points < 0 {
            return Err(GamificationError::invalid(
                "points",
                format!("must be non-negative, got {}", raw.points),
            ));
        }

        let rank = match raw.rank {
            None => None,
            Some(r) if r <= 0 => {
                return Err(GamificationError::invalid(
                    "rank",
                    format!("must be a positive 1-based position, got {r}"),
                ));
            }
            Some(r) => Some(non_negative_u32("rank", r)?),
        };

        Ok(Self {
            points: raw.points as u64,
            missions_completed: non_negative_u32("missions_completed", raw.missions_completed)?,
            eco_actions: non_negative_u32("eco_actions", raw.eco_actions)?,
            streak: non_negative_u32("streak", raw.streak)?,
            rank,
        })
    }
}
