//! Point multipliers driven by streak length and level
//!
//! Bonuses are tracked in hundredths so the two-decimal rounding is exact.

use std::fmt;

use serde::{Serialize, Serializer};

/// Streak thresholds and their cumulative bonus (hundredths)
const STREAK_BONUSES: [(u32, u32); 3] = [(7, 10), (30, 20), (100, 30)];

/// Level thresholds and their cumulative bonus (hundredths)
const LEVEL_BONUSES: [(u32, u32); 3] = [(5, 5), (10, 10), (20, 15)];

/// A point multiplier, e.g. `1.35`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiplier {
    hundredths: u32,
}

impl Multiplier {
    pub const NONE: Multiplier = Multiplier { hundredths: 100 };

    /// Multiplier for a streak length and level
    pub fn for_streak_and_level(streak: u32, level: u32) -> Self {
        let streak_bonus: u32 = STREAK_BONUSES
            .iter()
            .filter(|(threshold, _)| streak >= *threshold)
            .map(|(_, bonus)| bonus)
            .sum();
        let level_bonus: u32 = LEVEL_BONUSES
            .iter()
            .filter(|(threshold, _)| level >= *threshold)
            .map(|(_, bonus)| bonus)
            .sum();

        Self {
            hundredths: Self::NONE.hundredths + streak_bonus + level_bonus,
        }
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.hundredths) / 100.0
    }

    /// False when the factor is exactly 1.0; hosts may hide the display
    pub fn is_active(self) -> bool {
        self.hundredths != Self::NONE.hundredths
    }

    /// Apply to a base reward, rounding half away from zero
    pub fn boosted_points(self, base: u64) -> u64 {
        let scaled = u128::from(base) * u128::from(self.hundredths) + 50;
        u64::try_from(scaled / 100).unwrap_or(u64::MAX)
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}x", self.hundredths / 100, self.hundredths % 100)
    }
}

impl Serialize for Multiplier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Convenience wrapper returning the rounded factor
pub fn multiplier(streak: u32, level: u32) -> f64 {
    Multiplier::for_streak_and_level(streak, level).as_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bonus() {
        assert_eq!(multiplier(0, 1), 1.0);
        assert!(!Multiplier::for_streak_and_level(6, 4).is_active());
    }

    #[test]
    fn test_streak_bonuses_are_cumulative() {
        assert_eq!(multiplier(7, 1), 1.10);
        assert_eq!(multiplier(30, 1), 1.30);
        assert_eq!(multiplier(100, 1), 1.60);
    }

    #[test]
    fn test_level_bonuses_are_cumulative() {
        assert_eq!(multiplier(0, 5), 1.05);
        assert_eq!(multiplier(0, 10), 1.15);
        assert_eq!(multiplier(0, 20), 1.30);
    }

    #[test]
    fn test_maximum_multiplier() {
        assert_eq!(multiplier(100, 20), 1.90);
        assert_eq!(multiplier(365, 50), 1.90);
    }

    #[test]
    fn test_display() {
        assert_eq!(Multiplier::for_streak_and_level(7, 5).to_string(), "1.15x");
        assert_eq!(Multiplier::NONE.to_string(), "1.00x");
    }

    #[test]
    fn test_boosted_points() {
        let m = Multiplier::for_streak_and_level(7, 1);
        assert_eq!(m.boosted_points(30), 33);
        assert_eq!(m.boosted_points(25), 28); // 27.5 rounds up
        assert_eq!(Multiplier::NONE.boosted_points(150), 150);
        assert_eq!(Multiplier::NONE.boosted_points(u64::MAX), u64::MAX);
        assert_eq!(m.boosted_points(u64::MAX), u64::MAX);
    }
}
