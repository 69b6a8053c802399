//! Badge definitions and metadata
//!
//! All badges are defined here with their unlock rules. Declaration order is
//! display order and must stay stable.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::GamificationError;

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BadgeId {
    // Starter badges
    FirstSteps,
    GettingStarted,

    // Point milestones
    EcoNovice,
    EcoWarrior,
    GreenChampion,
    EarthGuardian,
    PlanetHero,
    EcoLegend,

    // Mission badges
    MissionStarter,
    MissionMaster,
    MissionLegend,

    // Streak badges
    Consistent,
    Dedicated,
    Unstoppable,

    // Category badges
    RecyclingHero,
    TransportChampion,
    EnergySaver,
    NatureLover,

    // Special badges
    EarlyBird,
    NightOwl,
    WeekendWarrior,
}

impl BadgeId {
    /// Get the string ID used by the host for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstSteps => "first_steps",
            Self::GettingStarted => "getting_started",
            Self::EcoNovice => "eco_novice",
            Self::EcoWarrior => "eco_warrior",
            Self::GreenChampion => "green_champion",
            Self::EarthGuardian => "earth_guardian",
            Self::PlanetHero => "planet_hero",
            Self::EcoLegend => "eco_legend",
            Self::MissionStarter => "mission_starter",
            Self::MissionMaster => "mission_master",
            Self::MissionLegend => "mission_legend",
            Self::Consistent => "consistent",
            Self::Dedicated => "dedicated",
            Self::Unstoppable => "unstoppable",
            Self::RecyclingHero => "recycling_hero",
            Self::TransportChampion => "transport_champion",
            Self::EnergySaver => "energy_saver",
            Self::NatureLover => "nature_lover",
            Self::EarlyBird => "early_bird",
            Self::NightOwl => "night_owl",
            Self::WeekendWarrior => "weekend_warrior",
        }
    }

    /// Get all badge IDs in catalog order
    pub fn all() -> impl Iterator<Item = BadgeId> {
        BADGES.iter().map(|b| b.id)
    }
}

impl FromStr for BadgeId {
    type Err = GamificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BADGES
            .iter()
            .map(|b| b.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| GamificationError::UnknownBadge(s.to_string()))
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BadgeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Badge rarity, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        }
    }
}

/// Badge category for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCategory {
    Starter,
    Points,
    Mission,
    Streak,
    Category,
    Special,
}

impl BadgeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Points => "Point Milestones",
            Self::Mission => "Missions",
            Self::Streak => "Streaks",
            Self::Category => "Categories",
            Self::Special => "Special",
        }
    }
}

/// Eco-action categories that have a dedicated badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    Recycling,
    Transport,
    Energy,
    Nature,
}

impl ActionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recycling => "recycling",
            Self::Transport => "transport",
            Self::Energy => "energy",
            Self::Nature => "nature",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "recycling" => Some(Self::Recycling),
            "transport" => Some(Self::Transport),
            "energy" => Some(Self::Energy),
            "nature" => Some(Self::Nature),
            _ => None,
        }
    }
}

/// Time-of-day and calendar conditions checked against an activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialCondition {
    /// An action logged before 08:00
    BeforeHour(u32),
    /// An action logged at or after 22:00
    AfterHour(u32),
    /// Actions on both Saturday and Sunday of one weekend
    BothWeekendDays,
}

/// Thresholds evaluated against stats. `None` means the axis is not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    pub points: Option<u64>,
    pub missions: Option<u32>,
    pub streak: Option<u32>,
}

impl Thresholds {
    const NONE: Thresholds = Thresholds {
        points: None,
        missions: None,
        streak: None,
    };

    const fn points(required: u64) -> Self {
        Self {
            points: Some(required),
            ..Self::NONE
        }
    }

    const fn missions(required: u32) -> Self {
        Self {
            missions: Some(required),
            ..Self::NONE
        }
    }

    const fn streak(required: u32) -> Self {
        Self {
            streak: Some(required),
            ..Self::NONE
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_none() && self.missions.is_none() && self.streak.is_none()
    }
}

/// Activity-based unlock rule, evaluated separately from thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityRule {
    EcoActions(u32),
    /// Points earned; kept out of `Thresholds` for the starter badge
    StarterPoints(u64),
    CategoryActions(ActionCategory, u32),
    Special(SpecialCondition),
}

/// Badge definition with all metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: Rarity,
    pub category: BadgeCategory,
    pub thresholds: Thresholds,
    pub activity: Option<ActivityRule>,
}

/// All badge definitions
pub static BADGES: &[Badge] = &[
    // === STARTER ===
    Badge {
        id: BadgeId::FirstSteps,
        name: "First Steps",
        description: "Complete your first eco action",
        icon: "👶",
        rarity: Rarity::Common,
        category: BadgeCategory::Starter,
        thresholds: Thresholds::NONE,
        activity: Some(ActivityRule::EcoActions(1)),
    },
    Badge {
        id: BadgeId::GettingStarted,
        name: "Getting Started",
        description: "Earn your first 50 points",
        icon: "🌱",
        rarity: Rarity::Common,
        category: BadgeCategory::Starter,
        thresholds: Thresholds::NONE,
        activity: Some(ActivityRule::StarterPoints(50)),
    },
    // === POINTS ===
    Badge {
        id: BadgeId::EcoNovice,
        name: "Eco Novice",
        description: "Reach 100 points",
        icon: "🌿",
        rarity: Rarity::Common,
        category: BadgeCategory::Points,
        thresholds: Thresholds::points(100),
        activity: None,
    },
    Badge {
        id: BadgeId::EcoWarrior,
        name: "Eco Warrior",
        description: "Reach 500 points",
        icon: "⚔️",
        rarity: Rarity::Rare,
        category: BadgeCategory::Points,
        thresholds: Thresholds::points(500),
        activity: None,
    },
    Badge {
        id: BadgeId::GreenChampion,
        name: "Green Champion",
        description: "Reach 1000 points",
        icon: "🏆",
        rarity: Rarity::Rare,
        category: BadgeCategory::Points,
        thresholds: Thresholds::points(1000),
        activity: None,
    },
    Badge {
        id: BadgeId::EarthGuardian,
        name: "Earth Guardian",
        description: "Reach 2500 points",
        icon: "🛡️",
        rarity: Rarity::Epic,
        category: BadgeCategory::Points,
        thresholds: Thresholds::points(2500),
        activity: None,
    },
    Badge {
        id: BadgeId::PlanetHero,
        name: "Planet Hero",
        description: "Reach 5000 points",
        icon: "🦸",
        rarity: Rarity::Epic,
        category: BadgeCategory::Points,
        thresholds: Thresholds::points(5000),
        activity: None,
    },
    Badge {
        id: BadgeId::EcoLegend,
        name: "Eco Legend",
        description: "Reach 10000 points",
        icon: "👑",
        rarity: Rarity::Legendary,
        category: BadgeCategory::Points,
        thresholds: Thresholds::points(10_000),
        activity: None,
    },
    // === MISSIONS ===
    Badge {
        id: BadgeId::MissionStarter,
        name: "Mission Starter",
        description: "Complete your first mission",
        icon: "🎯",
        rarity: Rarity::Common,
        category: BadgeCategory::Mission,
        thresholds: Thresholds::missions(1),
        activity: None,
    },
    Badge {
        id: BadgeId::MissionMaster,
        name: "Mission Master",
        description: "Complete 10 missions",
        icon: "🎖️",
        rarity: Rarity::Rare,
        category: BadgeCategory::Mission,
        thresholds: Thresholds::missions(10),
        activity: None,
    },
    Badge {
        id: BadgeId::MissionLegend,
        name: "Mission Legend",
        description: "Complete 25 missions",
        icon: "🏅",
        rarity: Rarity::Epic,
        category: BadgeCategory::Mission,
        thresholds: Thresholds::missions(25),
        activity: None,
    },
    // === STREAKS ===
    Badge {
        id: BadgeId::Consistent,
        name: "Consistent",
        description: "Maintain a 7-day streak",
        icon: "🔥",
        rarity: Rarity::Rare,
        category: BadgeCategory::Streak,
        thresholds: Thresholds::streak(7),
        activity: None,
    },
    Badge {
        id: BadgeId::Dedicated,
        name: "Dedicated",
        description: "Maintain a 30-day streak",
        icon: "💪",
        rarity: Rarity::Epic,
        category: BadgeCategory::Streak,
        thresholds: Thresholds::streak(30),
        activity: None,
    },
    Badge {
        id: BadgeId::Unstoppable,
        name: "Unstoppable",
        description: "Maintain a 100-day streak",
        icon: "⚡",
        rarity: Rarity::Legendary,
        category: BadgeCategory::Streak,
        thresholds: Thresholds::streak(100),
        activity: None,
    },
    // === CATEGORIES ===
    Badge {
        id: BadgeId::RecyclingHero,
        name: "Recycling Hero",
        description: "Complete 5 recycling actions",
        icon: "♻️",
        rarity: Rarity::Rare,
        category: BadgeCategory::Category,
        thresholds: Thresholds::NONE,
        activity: Some(ActivityRule::CategoryActions(ActionCategory::Recycling, 5)),
    },
    Badge {
        id: BadgeId::TransportChampion,
        name: "Transport Champion",
        description: "Complete 5 transport actions",
        icon: "🚲",
        rarity: Rarity::Rare,
        category: BadgeCategory::Category,
        thresholds: Thresholds::NONE,
        activity: Some(ActivityRule::CategoryActions(ActionCategory::Transport, 5)),
    },
    Badge {
        id: BadgeId::EnergySaver,
        name: "Energy Saver",
        description: "Complete 5 energy actions",
        icon: "💡",
        rarity: Rarity::Rare,
        category: BadgeCategory::Category,
        thresholds: Thresholds::NONE,
        activity: Some(ActivityRule::CategoryActions(ActionCategory::Energy, 5)),
    },
    Badge {
        id: BadgeId::NatureLover,
        name: "Nature Lover",
        description: "Complete 5 nature actions",
        icon: "🌳",
        rarity: Rarity::Rare,
        category: BadgeCategory::Category,
        thresholds: Thresholds::NONE,
        activity: Some(ActivityRule::CategoryActions(ActionCategory::Nature, 5)),
    },
    // === SPECIAL ===
    Badge {
        id: BadgeId::EarlyBird,
        name: "Early Bird",
        description: "Log an action before 8 AM",
        icon: "🌅",
        rarity: Rarity::Rare,
        category: BadgeCategory::Special,
        thresholds: Thresholds::NONE,
        activity: Some(ActivityRule::Special(SpecialCondition::BeforeHour(8))),
    },
    Badge {
        id: BadgeId::NightOwl,
        name: "Night Owl",
        description: "Log an action after 10 PM",
        icon: "🦉",
        rarity: Rarity::Rare,
        category: BadgeCategory::Special,
        thresholds: Thresholds::NONE,
        activity: Some(ActivityRule::Special(SpecialCondition::AfterHour(22))),
    },
    Badge {
        id: BadgeId::WeekendWarrior,
        name: "Weekend Warrior",
        description: "Complete actions on both weekend days",
        icon: "🏖️",
        rarity: Rarity::Rare,
        category: BadgeCategory::Special,
        thresholds: Thresholds::NONE,
        activity: Some(ActivityRule::Special(SpecialCondition::BothWeekendDays)),
    },
];

impl Badge {
    /// Get badge definition by ID
    pub fn get(id: BadgeId) -> &'static Badge {
        // Catalog order matches variant declaration order
        &BADGES[id as usize]
    }

    /// Look up a badge by its stored string ID
    pub fn by_str(id: &str) -> Result<&'static Badge, GamificationError> {
        id.parse::<BadgeId>().map(Badge::get)
    }

    /// Get total number of badges
    pub fn total_count() -> usize {
        BADGES.len()
    }

    pub fn by_category(category: BadgeCategory) -> Vec<&'static Badge> {
        BADGES.iter().filter(|b| b.category == category).collect()
    }
}
