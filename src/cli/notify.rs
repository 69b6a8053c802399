//! Notification preview command

use anyhow::{Context, Result};

use ecohunt::config::Config;
use ecohunt::{NotificationFactory, NotificationPayload, SystemClock};

/// Render a notification and print it as JSON
pub fn notify_command(config: &Config, kind: &str, payload: Option<&str>) -> Result<()> {
    let payload: NotificationPayload = match payload {
        Some(raw) => serde_json::from_str(raw).context("Invalid notification payload JSON")?,
        None => NotificationPayload::default(),
    };

    let factory = NotificationFactory::new(SystemClock)
        .with_default_badge_icon(config.notifications.default_badge_icon.clone());
    let notification = factory.create_from_str(kind, &payload)?;

    println!("{}", serde_json::to_string_pretty(&notification)?);
    Ok(())
}
