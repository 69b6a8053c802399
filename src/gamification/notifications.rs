//! Achievement notification rendering
//!
//! Turns a gamification event into the record the presentation layer shows.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::effects::Clock;
use crate::error::{GamificationError, Result};

/// Icon used for badge notifications whose payload carries none
pub const DEFAULT_BADGE_ICON: &str = "🏆";

/// Kind of achievement being announced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Badge,
    LevelUp,
    Streak,
    ChallengeComplete,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Badge => "badge",
            Self::LevelUp => "level_up",
            Self::Streak => "streak",
            Self::ChallengeComplete => "challenge_complete",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = GamificationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "badge" => Ok(Self::Badge),
            "level_up" => Ok(Self::LevelUp),
            "streak" => Ok(Self::Streak),
            "challenge_complete" => Ok(Self::ChallengeComplete),
            other => Err(GamificationError::UnknownNotificationKind(other.to_string())),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event data interpolated into the notification text
///
/// Which field is required depends on the kind: `name` for badges, `level`
/// for level-ups, `streak` for streaks and `title` for challenges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub streak: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub points: Option<u64>,
}

/// A rendered, transient achievement notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementNotification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u64>,
    pub timestamp: DateTime<Utc>,
}

fn require<T>(value: Option<T>, kind: NotificationKind, field: &'static str) -> Result<T> {
    value.ok_or(GamificationError::MissingPayloadField {
        kind: kind.as_str(),
        field,
    })
}

/// Renders notifications, stamping them with the injected clock
pub struct NotificationFactory<C> {
    clock: C,
    default_badge_icon: String,
}

impl<C: Clock> NotificationFactory<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            default_badge_icon: DEFAULT_BADGE_ICON.to_string(),
        }
    }

    pub fn with_default_badge_icon(mut self, icon: impl Into<String>) -> Self {
        self.default_badge_icon = icon.into();
        self
    }

    /// Render a notification of a known kind
    pub fn create(
        &self,
        kind: NotificationKind,
        payload: &NotificationPayload,
    ) -> Result<AchievementNotification> {
        let (title, description, icon) = match kind {
            NotificationKind::Badge => {
                let name = require(payload.name.as_deref(), kind, "name")?;
                (
                    "New Badge Earned!",
                    format!("You've earned the \"{name}\" badge!"),
                    payload
                        .icon
                        .clone()
                        .unwrap_or_else(|| self.default_badge_icon.clone()),
                )
            }
            NotificationKind::LevelUp => {
                let level = require(payload.level, kind, "level")?;
                (
                    "Level Up!",
                    format!("Congratulations! You've reached level {level}!"),
                    "⬆️".to_string(),
                )
            }
            NotificationKind::Streak => {
                let streak = require(payload.streak, kind, "streak")?;
                (
                    "Streak Milestone!",
                    format!("Amazing! You've maintained a {streak}-day streak!"),
                    "🔥".to_string(),
                )
            }
            NotificationKind::ChallengeComplete => {
                let title = require(payload.title.as_deref(), kind, "title")?;
                (
                    "Challenge Complete!",
                    format!("You've completed the \"{title}\" challenge!"),
                    "✅".to_string(),
                )
            }
        };

        let timestamp = self.clock.now()?;
        debug!("Created {} notification", kind);

        Ok(AchievementNotification {
            id: format!("{}_{}", kind.as_str(), timestamp.timestamp_millis()),
            kind,
            title: title.to_string(),
            description,
            icon,
            points: payload.points,
            timestamp,
        })
    }

    /// Render a notification from a host-supplied kind string
    ///
    /// Unknown kinds are an error, never a default notification.
    pub fn create_from_str(
        &self,
        kind: &str,
        payload: &NotificationPayload,
    ) -> Result<AchievementNotification> {
        self.create(kind.parse()?, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamification::effects::FixedClock;
    use chrono::TimeZone;

    fn factory() -> NotificationFactory<FixedClock> {
        NotificationFactory::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 5, 20, 8, 30, 0).unwrap(),
        ))
    }

    #[test]
    fn test_level_up_mentions_level() {
        let payload = NotificationPayload {
            level: Some(5),
            ..Default::default()
        };
        let n = factory().create_from_str("level_up", &payload).unwrap();
        assert_eq!(n.kind, NotificationKind::LevelUp);
        assert!(n.description.contains('5'));
        assert!(n.id.starts_with("level_up_"));
    }

    #[test]
    fn test_unknown_kind_fails() {
        let err = factory()
            .create_from_str("bogus_type", &NotificationPayload::default())
            .unwrap_err();
        assert_eq!(
            err,
            GamificationError::UnknownNotificationKind("bogus_type".to_string())
        );
    }

    #[test]
    fn test_missing_payload_field_fails() {
        let err = factory()
            .create(NotificationKind::Streak, &NotificationPayload::default())
            .unwrap_err();
        assert_eq!(
            err,
            GamificationError::MissingPayloadField {
                kind: "streak",
                field: "streak"
            }
        );
    }

    #[test]
    fn test_badge_icon_falls_back_to_default() {
        let payload = NotificationPayload {
            name: Some("Eco Warrior".to_string()),
            points: Some(50),
            ..Default::default()
        };
        let n = factory().create(NotificationKind::Badge, &payload).unwrap();
        assert_eq!(n.icon, DEFAULT_BADGE_ICON);
        assert_eq!(n.description, "You've earned the \"Eco Warrior\" badge!");
        assert_eq!(n.points, Some(50));

        let custom = factory()
            .with_default_badge_icon("🌍")
            .create(NotificationKind::Badge, &payload)
            .unwrap();
        assert_eq!(custom.icon, "🌍");
    }

    #[test]
    fn test_challenge_complete_text() {
        let payload = NotificationPayload {
            title: Some("Recycle Master".to_string()),
            ..Default::default()
        };
        let n = factory()
            .create(NotificationKind::ChallengeComplete, &payload)
            .unwrap();
        assert_eq!(n.title, "Challenge Complete!");
        assert!(n.description.contains("Recycle Master"));
    }

    #[test]
    fn test_payload_from_host_json() {
        let payload: NotificationPayload = serde_json::from_str(r#"{"streak": 30}"#).unwrap();
        let n = factory().create(NotificationKind::Streak, &payload).unwrap();
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["type"], "streak");
        assert!(json.get("points").is_none());
    }
}
