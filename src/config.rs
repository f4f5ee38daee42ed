use std::path::{Path, PathBuf};

use crate::ai::{LearningParams, PolicyConfig};
use crate::error::ConfigError;
use crate::session::RewardConfig;

/// Where the table lives and how games are paced.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub table_path: PathBuf,
    /// Pause before each automated move, purely cosmetic.
    pub move_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            table_path: PathBuf::from("q_table_data.json"),
            move_delay_ms: 2000,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub learning: LearningParams,
    pub policy: PolicyConfig,
    pub rewards: RewardConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let alpha = self.learning.alpha;
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(ConfigError::Validation(
                "learning.alpha must be in (0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.learning.gamma) {
            return Err(ConfigError::Validation(
                "learning.gamma must be in [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.policy.epsilon) {
            return Err(ConfigError::Validation(
                "policy.epsilon must be in [0, 1]".into(),
            ));
        }

        let r = &self.rewards;
        if [r.win, r.loss, r.draw, r.step].iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Validation(
                "rewards must be finite numbers".into(),
            ));
        }
        if r.win <= r.loss {
            return Err(ConfigError::Validation(
                "rewards.win must be > rewards.loss".into(),
            ));
        }

        if self.session.table_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "session.table_path must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
