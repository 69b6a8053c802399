//! XP and Level system
//!
//! Levels follow a square-root curve: level `n` is first reached at
//! `(n - 1)^2 * 100` points, so each level costs 200 more points than the last.

use serde::Serialize;

/// Points per "unit" of the level curve
const POINTS_PER_STEP: u64 = 100;

/// Level reached with the given point total
///
/// `floor(sqrt(points / 100)) + 1`. Level 1 covers 0..=99.
pub fn level_for_points(points: u64) -> u32 {
    ((points / POINTS_PER_STEP).isqrt() + 1) as u32
}

/// Point total at which the level *after* `level` begins
///
/// `level^2 * 100`, used as the upper bound of `level`. Saturates at
/// `u64::MAX` for the handful of levels past the end of the point range.
pub fn points_required_for_level(level: u32) -> u64 {
    let level = u64::from(level);
    level.saturating_mul(level).saturating_mul(POINTS_PER_STEP)
}

/// Level and progress derived from a point total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub current_level: u32,
    pub next_level: u32,
    /// Percent of the way through the current level (0.0 - 100.0)
    pub progress_percent: f64,
    /// Signed so an out-of-band total shows up instead of wrapping
    pub points_to_next: i64,
}

impl LevelInfo {
    /// Compute level progress for a point total
    pub fn for_points(points: u64) -> Self {
        let current_level = level_for_points(points);
        let lower = points_required_for_level(current_level - 1);
        let upper = points_required_for_level(current_level);

        let span = upper - lower;
        let into_level = points.saturating_sub(lower);
        let progress = if span == 0 {
            100.0
        } else {
            100.0 * into_level as f64 / span as f64
        };

        Self {
            current_level,
            next_level: current_level + 1,
            progress_percent: progress.clamp(0.0, 100.0),
            points_to_next: points_between(points, upper),
        }
    }

    /// Whether this is a higher level than `previous`
    pub fn is_level_up_from(&self, previous: &LevelInfo) -> bool {
        self.current_level > previous.current_level
    }
}

/// `upper - points`, widened so neither side can wrap
fn points_between(points: u64, upper: u64) -> i64 {
    let gap = i128::from(upper) - i128::from(points);
    i64::try_from(gap).unwrap_or(if gap < 0 { i64::MIN } else { i64::MAX })
}
