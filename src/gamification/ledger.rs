//! Earned vs. newly-earned badge partitioning
//!
//! "Earned" is host state: the set of badge ids previously granted. The
//! engines only ever report eligibility; this module reconciles the two.

use std::collections::HashSet;

use serde::Serialize;

use super::definitions::{Badge, BadgeId};

/// Eligible badges split by whether the host already granted them
#[derive(Debug, Clone, Default, Serialize)]
pub struct BadgePartition {
    /// eligible ∩ granted
    pub earned: Vec<&'static Badge>,
    /// eligible − granted; these are the ones to grant and announce
    pub newly_earned: Vec<&'static Badge>,
}

impl BadgePartition {
    /// Split `eligible` against the granted set, keeping catalog order
    pub fn split(eligible: &[&'static Badge], granted: &HashSet<BadgeId>) -> Self {
        let (earned, newly_earned) = eligible
            .iter()
            .copied()
            .partition(|b| granted.contains(&b.id));
        Self {
            earned,
            newly_earned,
        }
    }
}

/// How many badges a display surface shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseMode {
    Compact,
    Default,
    All,
}

/// Per-mode limits as `(earned, available)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseLimits {
    pub compact: (usize, usize),
    pub default: (usize, usize),
}

impl Default for ShowcaseLimits {
    fn default() -> Self {
        Self {
            compact: (3, 2),
            default: (6, 3),
        }
    }
}

/// Bounded display list: earned first, then newly available, each in catalog order
pub fn showcase(
    partition: &BadgePartition,
    mode: ShowcaseMode,
    limits: ShowcaseLimits,
) -> Vec<&'static Badge> {
    let (earned_limit, available_limit) = match mode {
        ShowcaseMode::Compact => limits.compact,
        ShowcaseMode::Default => limits.default,
        ShowcaseMode::All => (usize::MAX, usize::MAX),
    };

    partition
        .earned
        .iter()
        .take(earned_limit)
        .chain(partition.newly_earned.iter().take(available_limit))
        .copied()
        .collect()
}

/// Parse host-stored ids, skipping ones this catalog no longer knows
pub fn granted_set<'a>(ids: impl IntoIterator<Item = &'a str>) -> HashSet<BadgeId> {
    ids.into_iter()
        .filter_map(|id| match id.parse::<BadgeId>() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!("Ignoring granted badge: {}", e);
                None
            }
        })
        .collect()
}
