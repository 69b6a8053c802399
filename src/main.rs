use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ecohunt::RawUserStats;
use ecohunt::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "ecohunt")]
#[command(about = "EcoHunt - levels, badges, streaks and challenges for eco-actions")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.ecohunt/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show level and progress for a point total
    Level { points: u64 },

    /// Show the point multiplier for a streak and level
    Multiplier { streak: u32, level: u32 },

    /// List eligible badges, marking ones not yet granted with '*'
    Badges {
        points: u64,
        missions: u32,
        streak: u32,
        /// Badge ids already granted (comma separated)
        #[arg(long, value_delimiter = ',')]
        granted: Vec<String>,
        /// Show every eligible badge instead of the bounded showcase
        #[arg(long, conflicts_with = "compact")]
        all: bool,
        /// Use the smaller compact showcase limits
        #[arg(long)]
        compact: bool,
    },

    /// Show the leaderboard tier for a rank
    Tier { rank: u32 },

    /// Generate today's daily challenges
    Challenges {
        /// Number of challenges (defaults to config)
        #[arg(long)]
        count: Option<usize>,
    },

    /// Render an achievement notification
    Notify {
        /// badge, level_up, streak or challenge_complete
        kind: String,
        /// Payload as JSON, e.g. '{"level": 5}'
        #[arg(long)]
        json: Option<String>,
    },

    /// Evaluate every engine for one user's stats
    Dashboard {
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        points: i64,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        missions: i64,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        eco_actions: i64,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        streak: i64,
        #[arg(long, allow_hyphen_values = true)]
        rank: Option<i64>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize a new config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
        /// Challenges offered per day
        #[arg(long)]
        daily_count: Option<usize>,
        /// Never repeat a template within one day's set
        #[arg(long)]
        distinct_templates: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config;
    let load_config = || -> Result<Config> {
        match &config_path {
            Some(path) => Config::from_file(path),
            None => Config::load(),
        }
    };

    match cli.command {
        Commands::Level { points } => cli::inspect::level_command(points)?,
        Commands::Multiplier { streak, level } => cli::inspect::multiplier_command(streak, level)?,
        Commands::Badges {
            points,
            missions,
            streak,
            granted,
            all,
            compact,
        } => {
            let config = load_config()?;
            let mode = cli::inspect::showcase_mode(all, compact);
            cli::inspect::badges_command(&config, points, missions, streak, &granted, mode)?
        }
        Commands::Tier { rank } => cli::inspect::tier_command(rank)?,
        Commands::Challenges { count } => {
            cli::challenge::challenges_command(&load_config()?, count)?
        }
        Commands::Notify { kind, json } => {
            cli::notify::notify_command(&load_config()?, &kind, json.as_deref())?
        }
        Commands::Dashboard {
            points,
            missions,
            eco_actions,
            streak,
            rank,
            json,
        } => {
            let raw = RawUserStats {
                points,
                missions_completed: missions,
                eco_actions,
                streak,
                rank,
            };
            cli::dashboard::dashboard_command(raw, json)?
        }
        Commands::Init {
            force,
            daily_count,
            distinct_templates,
        } => {
            let options = cli::init::InitOptions {
                force,
                daily_count,
                distinct_templates,
            };
            cli::init::init_command(config_path.clone(), &options)?
        }
    }

    Ok(())
}
