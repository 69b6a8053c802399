//! EcoHunt - gamification for eco-action tracking
//!
//! EcoHunt turns a user's raw activity (points, completed missions, daily
//! streaks) into levels, badge eligibility, point multipliers, leaderboard
//! tiers and daily challenges. The host application owns persistence,
//! authentication and rendering; this crate only derives state from the
//! numbers it is handed.
//!
//! ## Layers
//!
//! 1. **Engines** ([`gamification`]): pure derivations over a [`UserStats`]
//!    snapshot, plus a challenge generator and notification factory with
//!    injectable clock and randomness.
//!
//! 2. **Config** ([`config`]): display limits and challenge settings loaded
//!    from `~/.ecohunt/config.toml`.

pub mod config;
pub mod error;
pub mod gamification;

pub use error::{GamificationError, Result};
pub use gamification::*;
