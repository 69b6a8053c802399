//! Single-engine inspection commands: level, multiplier, badges, tier

use anyhow::Result;

use ecohunt::config::Config;
use ecohunt::{
    BadgePartition, LevelInfo, Multiplier, ShowcaseMode, eligible_badges, granted_set, showcase,
    tier_for_rank,
};

pub fn level_command(points: u64) -> Result<()> {
    let info = LevelInfo::for_points(points);
    println!(
        "Level {} ({:.1}% to level {})",
        info.current_level, info.progress_percent, info.next_level
    );
    println!("  {} points to next level", info.points_to_next);
    Ok(())
}

pub fn multiplier_command(streak: u32, level: u32) -> Result<()> {
    let m = Multiplier::for_streak_and_level(streak, level);
    if m.is_active() {
        println!("Multiplier: {}", m);
    } else {
        println!("Multiplier: {} (no bonus active)", m);
    }
    Ok(())
}

/// Showcase mode selected by the `--all` / `--compact` flags
pub fn showcase_mode(all: bool, compact: bool) -> ShowcaseMode {
    match (all, compact) {
        (true, _) => ShowcaseMode::All,
        (false, true) => ShowcaseMode::Compact,
        (false, false) => ShowcaseMode::Default,
    }
}

pub fn badges_command(
    config: &Config,
    points: u64,
    missions: u32,
    streak: u32,
    granted: &[String],
    mode: ShowcaseMode,
) -> Result<()> {
    let eligible = eligible_badges(points, missions, streak);
    if eligible.is_empty() {
        println!("No badges eligible yet.");
        return Ok(());
    }

    let granted = granted_set(granted.iter().map(String::as_str));
    let partition = BadgePartition::split(&eligible, &granted);

    println!(
        "Badges ({} earned, {} new):\n",
        partition.earned.len(),
        partition.newly_earned.len()
    );
    for badge in showcase(&partition, mode, config.showcase.limits()) {
        let marker = if granted.contains(&badge.id) { " " } else { "*" };
        println!(
            " {} {} {} [{}] - {}",
            marker,
            badge.icon,
            badge.name,
            badge.rarity.label(),
            badge.description
        );
    }
    Ok(())
}

pub fn tier_command(rank: u32) -> Result<()> {
    let tier = tier_for_rank(rank)?;
    println!("Rank #{}: {} {}", rank, tier.icon, tier.name);
    Ok(())
}
