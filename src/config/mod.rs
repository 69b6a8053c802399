//! Configuration loading and management

mod io;
mod settings;

pub use settings::{ChallengeSettings, NotificationSettings, ShowcaseSettings};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Daily challenge generation
    #[serde(default)]
    pub challenges: ChallengeSettings,

    /// Badge showcase display limits
    #[serde(default)]
    pub showcase: ShowcaseSettings,

    /// Notification rendering
    #[serde(default)]
    pub notifications: NotificationSettings,
}

impl Config {
    /// Check values serde cannot express as constraints
    pub fn validate(&self) -> Result<()> {
        if self.challenges.daily_count == 0 {
            bail!("challenges.daily_count must be at least 1");
        }
        if self.notifications.default_badge_icon.trim().is_empty() {
            bail!("notifications.default_badge_icon must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.challenges.daily_count, 3);
        assert_eq!(config.showcase.limits().compact, (3, 2));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [showcase]
            earned_limit = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.showcase.earned_limit, 10);
        assert_eq!(config.showcase.available_limit, 3);
    }

    #[test]
    fn test_zero_daily_count_invalid() {
        let mut config = Config::default();
        config.challenges.daily_count = 0;
        assert!(config.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }
}
