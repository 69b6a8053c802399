//! Daily challenge command

use anyhow::{Context, Result};

use ecohunt::config::Config;
use ecohunt::{ChallengeGenerator, OsRandom, SystemClock};

/// Print today's challenge set
pub fn challenges_command(config: &Config, count: Option<usize>) -> Result<()> {
    let count = count.unwrap_or(config.challenges.daily_count);
    let mut generator = ChallengeGenerator::new(OsRandom, SystemClock);
    let challenges = generator
        .generate_daily_set(count, config.challenges.distinct_templates)
        .context("Failed to generate daily challenges")?;

    println!("Daily challenges ({}):\n", challenges.len());
    for challenge in challenges {
        println!(
            "  {} [{}] {} - {}",
            challenge.id, challenge.category, challenge.title, challenge.description
        );
        println!(
            "    Target: {}  Reward: {} points  Ends: {}",
            challenge.target,
            challenge.reward_points,
            challenge.end_date.to_rfc3339()
        );
    }
    Ok(())
}
