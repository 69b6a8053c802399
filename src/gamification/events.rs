//! Gamification events and notification dispatch
//!
//! Callers that complete a qualifying action detect events here, render them
//! through the factory, and publish the records on a [`NotificationBus`] the
//! presentation layer subscribes to.

use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, info};

use super::challenges::Challenge;
use super::checker::eligible_badges;
use super::definitions::{Badge, BadgeId};
use super::effects::Clock;
use super::levels::level_for_points;
use super::notifications::{
    AchievementNotification, NotificationFactory, NotificationKind, NotificationPayload,
};
use super::stats::UserStats;
use super::streaks::crossed_milestone;
use crate::error::Result;

/// A level up event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

/// Events that can happen between two stat snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamificationEvent {
    BadgeEarned(&'static Badge),
    LevelUp(LevelUp),
    StreakMilestone { count: u32 },
    ChallengeCompleted { title: String, reward_points: u32 },
}

impl GamificationEvent {
    pub fn challenge_completed(challenge: &Challenge) -> Self {
        Self::ChallengeCompleted {
            title: challenge.title.clone(),
            reward_points: challenge.reward_points,
        }
    }

    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::BadgeEarned(_) => NotificationKind::Badge,
            Self::LevelUp(_) => NotificationKind::LevelUp,
            Self::StreakMilestone { .. } => NotificationKind::Streak,
            Self::ChallengeCompleted { .. } => NotificationKind::ChallengeComplete,
        }
    }

    fn payload(&self) -> NotificationPayload {
        match self {
            Self::BadgeEarned(badge) => NotificationPayload {
                name: Some(badge.name.to_string()),
                icon: Some(badge.icon.to_string()),
                ..Default::default()
            },
            Self::LevelUp(level_up) => NotificationPayload {
                level: Some(level_up.new_level),
                ..Default::default()
            },
            Self::StreakMilestone { count } => NotificationPayload {
                streak: Some(*count),
                ..Default::default()
            },
            Self::ChallengeCompleted {
                title,
                reward_points,
            } => NotificationPayload {
                title: Some(title.clone()),
                points: Some(u64::from(*reward_points)),
                ..Default::default()
            },
        }
    }

    pub fn to_notification<C: Clock>(
        &self,
        factory: &NotificationFactory<C>,
    ) -> Result<AchievementNotification> {
        factory.create(self.kind(), &self.payload())
    }
}

/// Compare two snapshots and report what the user just achieved
///
/// Badges are reported when eligible after the change and absent from
/// `granted`; the host records the grant.
pub fn detect_events(
    before: &UserStats,
    after: &UserStats,
    granted: &HashSet<BadgeId>,
) -> Vec<GamificationEvent> {
    let mut events = Vec::new();

    let old_level = level_for_points(before.points);
    let new_level = level_for_points(after.points);
    if new_level > old_level {
        events.push(GamificationEvent::LevelUp(LevelUp {
            old_level,
            new_level,
        }));
    }

    events.extend(
        eligible_badges(after.points, after.missions_completed, after.streak)
            .into_iter()
            .filter(|badge| !granted.contains(&badge.id))
            .map(GamificationEvent::BadgeEarned),
    );

    if let Some(count) = crossed_milestone(before.streak, after.streak) {
        events.push(GamificationEvent::StreakMilestone { count });
    }

    if !events.is_empty() {
        debug!("Detected {} gamification events", events.len());
    }
    events
}

/// Typed fan-out channel for rendered notifications
#[derive(Default)]
pub struct NotificationBus {
    subscribers: Vec<Sender<AchievementNotification>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; dropping the receiver unsubscribes it
    pub fn subscribe(&mut self) -> Receiver<AchievementNotification> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver to every live subscriber, returning how many received it
    pub fn publish(&mut self, notification: AchievementNotification) -> usize {
        let before = self.subscribers.len();
        self.subscribers
            .retain(|tx| tx.send(notification.clone()).is_ok());

        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            debug!("Pruned {} disconnected notification subscribers", dropped);
        }
        self.subscribers.len()
    }

    /// Render each event and publish it
    ///
    /// Events rendered within the same millisecond would share an id, so a
    /// repeated id gets the event's batch index appended.
    pub fn dispatch<C: Clock>(
        &mut self,
        events: &[GamificationEvent],
        factory: &NotificationFactory<C>,
    ) -> Result<usize> {
        let mut seen_ids = HashSet::new();
        for (index, event) in events.iter().enumerate() {
            let mut notification = event.to_notification(factory)?;
            if !seen_ids.insert(notification.id.clone()) {
                notification.id = format!("{}_{}", notification.id, index);
                seen_ids.insert(notification.id.clone());
            }
            info!("{}: {}", notification.title, notification.description);
            self.publish(notification);
        }
        Ok(events.len())
    }
}
