//! Init command implementation

use anyhow::{Result, bail};
use std::path::PathBuf;

use ecohunt::config::Config;

/// Overrides applied on top of the default config before it is written
#[derive(Debug, Default)]
pub struct InitOptions {
    pub force: bool,
    pub daily_count: Option<usize>,
    pub distinct_templates: bool,
}

impl InitOptions {
    fn build_config(&self) -> Config {
        let mut config = Config::default();
        if let Some(count) = self.daily_count {
            config.challenges.daily_count = count;
        }
        config.challenges.distinct_templates = self.distinct_templates;
        config
    }
}

/// Write a starting config file, defaults plus any overrides
pub fn init_command(config_path: Option<PathBuf>, options: &InitOptions) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !options.force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    options.build_config().save_to_file(&config_path)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
