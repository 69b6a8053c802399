//! Dashboard command

use anyhow::{Context, Result};

use ecohunt::{DashboardState, RawUserStats, UserStats};

/// Evaluate every engine for one stat snapshot
pub fn dashboard_command(raw: RawUserStats, json: bool) -> Result<()> {
    let stats = UserStats::try_from(raw).context("Invalid user stats")?;
    let state = DashboardState::evaluate(&stats)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!(
        "Level {} - {:.1}% ({} points to level {})",
        state.level.current_level,
        state.level.progress_percent,
        state.level.points_to_next,
        state.level.next_level
    );
    println!("Streak: {} days - {}", stats.streak, state.streak_mood.message());
    if state.multiplier.is_active() {
        println!("Multiplier: {}", state.multiplier);
    }
    match state.tier {
        Some(tier) => println!("Tier: {} {}", tier.icon, tier.name),
        None => println!("Tier: unranked"),
    }

    println!("\nEligible badges ({}):", state.eligible_badges.len());
    for badge in &state.eligible_badges {
        println!("  {} {}", badge.icon, badge.name);
    }
    Ok(())
}
