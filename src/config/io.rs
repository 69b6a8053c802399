//! Configuration file I/O operations

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use tracing::{debug, info, warn};

use super::Config;

impl Config {
    /// Get the global config directory path (~/.ecohunt/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ecohunt")
    }

    /// Get the global config file path (~/.ecohunt/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load and validate configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Load the global configuration (~/.ecohunt/config.toml)
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::global_config_path())
    }

    /// Validate and persist to `path`
    ///
    /// Writers of the same path are serialized through a sibling `.lock`
    /// file, and the new content only replaces the old by rename.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()
            .with_context(|| format!("Refusing to save invalid config to {}", path.display()))?;

        let body = toml::to_string_pretty(self).context("Failed to serialize config")?;
        let content = format!("{CONFIG_HEADER}\n{body}");

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let _guard = WriteLock::acquire(path)?;
        replace_file(path, &content)?;

        info!(
            "Saved config to {} ({} daily challenges)",
            path.display(),
            self.challenges.daily_count
        );
        Ok(())
    }
}

/// Comment block written above every saved config
const CONFIG_HEADER: &str = "\
# EcoHunt configuration
#
# [challenges]    daily_count, distinct_templates
# [showcase]      compact_earned, compact_available, earned_limit, available_limit
# [notifications] default_badge_icon
";

/// Exclusive lock on `<config>.toml.lock`, held until dropped
struct WriteLock {
    file: File,
}

impl WriteLock {
    fn acquire(config_path: &Path) -> Result<Self> {
        let lock_path = config_path.with_extension("toml.lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        file.lock_exclusive()
            .with_context(|| format!("Failed to lock {}", lock_path.display()))?;
        debug!("Holding config lock {}", lock_path.display());
        Ok(Self { file })
    }
}

impl Drop for WriteLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!("Failed to release config lock: {}", e);
        }
    }
}

/// Write `content` to a temp sibling, fsync it and rename it over `path`
///
/// The temp file is removed again if any step fails.
fn replace_file(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("toml.tmp");

    let written = (|| -> Result<()> {
        let mut temp = File::create(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;
        temp.write_all(content.as_bytes())
            .context("Failed to write config content")?;
        temp.sync_all().context("Failed to sync config file")?;
        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to replace config file: {}", path.display()))
    })();

    if written.is_err() {
        let _ = std::fs::remove_file(&temp_path);
    }
    written
}
