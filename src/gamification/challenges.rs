//! Daily Challenge System
//!
//! Challenges are drawn at random from a fixed template catalog and bounded
//! to a one-day window. Progress tracking and completion belong to the host.

use std::collections::HashSet;

use chrono::{DateTime, Days, Utc};
use serde::Serialize;
use tracing::debug;

use super::definitions::BadgeId;
use super::effects::{Clock, RandomSource};
use crate::error::{GamificationError, Result};

/// Upper bound on rejection-sampling draws per requested challenge
const MAX_DRAWS_PER_CHALLENGE: usize = 64;

/// Challenge cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeType {
    Daily,
    Weekly,
    Monthly,
    Special,
}

impl ChallengeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Special => "special",
        }
    }
}

/// Template a challenge instance is stamped from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub target: u32,
    pub reward_points: u32,
    pub category: &'static str,
}

/// All daily challenge templates
pub static DAILY_TEMPLATES: &[ChallengeTemplate] = &[
    ChallengeTemplate {
        title: "Recycle Master",
        description: "Recycle 3 items today",
        target: 3,
        reward_points: 30,
        category: "recycling",
    },
    ChallengeTemplate {
        title: "Green Commuter",
        description: "Use eco-friendly transport",
        target: 1,
        reward_points: 25,
        category: "transport",
    },
    ChallengeTemplate {
        title: "Energy Saver",
        description: "Turn off 5 unused devices",
        target: 5,
        reward_points: 20,
        category: "energy",
    },
    ChallengeTemplate {
        title: "Water Guardian",
        description: "Save water 3 times today",
        target: 3,
        reward_points: 15,
        category: "water",
    },
    ChallengeTemplate {
        title: "Eco Educator",
        description: "Share 1 eco-tip",
        target: 1,
        reward_points: 10,
        category: "education",
    },
];

/// A generated challenge instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ChallengeType,
    pub target: u32,
    pub reward_points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_badge: Option<BadgeId>,
    pub category: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Challenge {
    /// Whether `at` falls inside the challenge window (end exclusive)
    pub fn is_open_at(&self, at: DateTime<Utc>) -> bool {
        self.start_date <= at && at < self.end_date
    }
}

/// Generates challenge instances from a template catalog
///
/// The random source and clock are injected so tests can pin both.
pub struct ChallengeGenerator<R, C> {
    templates: &'static [ChallengeTemplate],
    rng: R,
    clock: C,
}

impl<R: RandomSource, C: Clock> ChallengeGenerator<R, C> {
    /// Generator over the built-in daily templates
    pub fn new(rng: R, clock: C) -> Self {
        Self {
            templates: DAILY_TEMPLATES,
            rng,
            clock,
        }
    }

    /// Generator over a custom catalog
    pub fn with_templates(
        templates: &'static [ChallengeTemplate],
        rng: R,
        clock: C,
    ) -> Result<Self> {
        if templates.is_empty() {
            return Err(GamificationError::EmptyCatalog);
        }
        Ok(Self {
            templates,
            rng,
            clock,
        })
    }

    pub fn templates(&self) -> &'static [ChallengeTemplate] {
        self.templates
    }

    /// Draw one template uniformly and open a one-day window starting now
    ///
    /// The id is `daily_<unix millis>`; two calls within one millisecond
    /// produce the same id (see `generate_daily_set`).
    pub fn generate_daily(&mut self) -> Result<Challenge> {
        let index = self.rng.pick(self.templates.len())?;
        let template = &self.templates[index];
        let start = self.clock.now()?;
        let end = start
            .checked_add_days(Days::new(1))
            .ok_or_else(|| GamificationError::invalid("start_date", "no following calendar day"))?;

        debug!(
            "Generated daily challenge '{}' (template {})",
            template.title, index
        );

        Ok(Challenge {
            id: format!("{}_{}", ChallengeType::Daily.as_str(), start.timestamp_millis()),
            title: template.title.to_string(),
            description: template.description.to_string(),
            kind: ChallengeType::Daily,
            target: template.target,
            reward_points: template.reward_points,
            reward_badge: None,
            category: template.category.to_string(),
            start_date: start,
            end_date: end,
        })
    }

    /// Generate `count` daily challenges
    ///
    /// With `distinct`, templates are rejection-sampled so none repeats,
    /// which requires `count` to fit in the catalog. Ids that collide within
    /// the set get an `_<index>` suffix.
    pub fn generate_daily_set(&mut self, count: usize, distinct: bool) -> Result<Vec<Challenge>> {
        if distinct && count > self.templates.len() {
            return Err(GamificationError::invalid(
                "count",
                format!(
                    "cannot draw {count} distinct challenges from {} templates",
                    self.templates.len()
                ),
            ));
        }

        let mut challenges: Vec<Challenge> = Vec::with_capacity(count);
        let mut seen_titles = HashSet::new();
        let mut seen_ids = HashSet::new();
        let mut draws_left = count.saturating_mul(MAX_DRAWS_PER_CHALLENGE);

        while challenges.len() < count {
            if draws_left == 0 {
                return Err(GamificationError::Dependency(
                    "random source kept repeating templates".to_string(),
                ));
            }
            draws_left -= 1;

            let mut challenge = self.generate_daily()?;
            if distinct && !seen_titles.insert(challenge.title.clone()) {
                continue;
            }
            if !seen_ids.insert(challenge.id.clone()) {
                challenge.id = format!("{}_{}", challenge.id, challenges.len());
                seen_ids.insert(challenge.id.clone());
            }
            challenges.push(challenge);
        }

        debug!("Generated {} daily challenges (distinct: {})", count, distinct);
        Ok(challenges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamification::effects::{FixedClock, OsRandom, SequenceRandom};
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap()
    }

    fn seeded(values: Vec<usize>) -> ChallengeGenerator<SequenceRandom, FixedClock> {
        ChallengeGenerator::new(SequenceRandom::new(values), FixedClock(noon()))
    }

    #[test]
    fn test_daily_window_is_one_calendar_day() {
        let mut generator = seeded(vec![0]);
        let challenge = generator.generate_daily().unwrap();
        assert_eq!(challenge.start_date, noon());
        assert_eq!(
            challenge.end_date,
            Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(challenge.kind, ChallengeType::Daily);
        assert!(challenge.is_open_at(noon()));
        assert!(!challenge.is_open_at(challenge.end_date));
    }

    #[test]
    fn test_selected_template_is_copied() {
        let mut generator = seeded(vec![3]);
        let challenge = generator.generate_daily().unwrap();
        assert_eq!(challenge.title, "Water Guardian");
        assert_eq!(challenge.target, 3);
        assert_eq!(challenge.reward_points, 15);
        assert_eq!(challenge.category, "water");
    }

    #[test]
    fn test_id_embeds_timestamp() {
        let mut generator = seeded(vec![0]);
        let challenge = generator.generate_daily().unwrap();
        assert_eq!(challenge.id, format!("daily_{}", noon().timestamp_millis()));
    }

    #[test]
    fn test_random_output_always_matches_a_template() {
        let mut generator = ChallengeGenerator::new(OsRandom, FixedClock(noon()));
        for _ in 0..50 {
            let c = generator.generate_daily().unwrap();
            assert!(DAILY_TEMPLATES
                .iter()
                .any(|t| t.target == c.target && t.reward_points == c.reward_points));
        }
    }

    #[test]
    fn test_set_may_repeat_templates_but_ids_stay_unique() {
        let mut generator = seeded(vec![2]);
        let set = generator.generate_daily_set(3, false).unwrap();
        assert!(set.iter().all(|c| c.title == "Energy Saver"));
        let ids: HashSet<_> = set.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_distinct_set_rejects_repeats() {
        let rng = SequenceRandom::new(vec![1, 1, 4, 1, 4, 0]);
        let mut generator = ChallengeGenerator::new(rng, FixedClock(noon()));
        let set = generator.generate_daily_set(3, true).unwrap();
        let titles: Vec<_> = set.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Green Commuter", "Eco Educator", "Recycle Master"]);
    }

    #[test]
    fn test_distinct_set_larger_than_catalog_fails() {
        let mut generator = ChallengeGenerator::new(OsRandom, FixedClock(noon()));
        assert!(generator.generate_daily_set(6, true).is_err());
    }

    #[test]
    fn test_stuck_random_source_gives_up() {
        let mut generator = seeded(vec![0]);
        let result = generator.generate_daily_set(2, true);
        assert!(matches!(result, Err(GamificationError::Dependency(_))));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = ChallengeGenerator::with_templates(&[], OsRandom, FixedClock(noon()));
        assert!(matches!(result, Err(GamificationError::EmptyCatalog)));
    }

    #[test]
    fn test_serializes_type_field() {
        let mut generator = seeded(vec![0]);
        let json = serde_json::to_value(generator.generate_daily().unwrap()).unwrap();
        assert_eq!(json["type"], "daily");
        assert_eq!(json["rewardPoints"], 30);
        assert!(json.get("rewardBadge").is_none());
    }
}
