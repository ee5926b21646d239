use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AidexConfig {
    pub log_level: String,
    pub storage: StorageConfig,
    pub images: ImageConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
    /// Seed the bundled sample websites on `init` (development data).
    pub seed_samples: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ImageConfig {
    /// Directory for displayable icon scratch files.
    pub cache_dir: String,
}

impl Default for AidexConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            storage: StorageConfig::default(),
            images: ImageConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_aidex_dir()
            .join("aidex.db")
            .to_string_lossy()
            .into_owned();
        Self {
            db_path,
            seed_samples: false,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        let cache_dir = default_aidex_dir()
            .join("icons")
            .to_string_lossy()
            .into_owned();
        Self { cache_dir }
    }
}

/// Returns `~/.aidex/`
pub fn default_aidex_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".aidex")
}

/// Returns the default config file path: `~/.aidex/config.toml`
pub fn default_config_path() -> PathBuf {
    default_aidex_dir().join("config.toml")
}

impl AidexConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            AidexConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (AIDEX_DB, AIDEX_LOG_LEVEL, AIDEX_SEED_SAMPLES).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("AIDEX_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("AIDEX_LOG_LEVEL") {
            self.log_level = val;
        }
        if let Ok(val) = std::env::var("AIDEX_SEED_SAMPLES") {
            self.storage.seed_samples = matches!(val.as_str(), "1" | "true" | "yes");
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    /// Resolve the icon scratch directory, expanding `~` if needed.
    pub fn resolved_icon_dir(&self) -> PathBuf {
        expand_tilde(&self.images.cache_dir)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AidexConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.storage.seed_samples);
        assert!(config.storage.db_path.ends_with("aidex.db"));
        assert!(config.images.cache_dir.ends_with("icons"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
log_level = "debug"

[storage]
db_path = "/tmp/test.db"
seed_samples = true
"#;
        let config: AidexConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.storage.db_path, "/tmp/test.db");
        assert!(config.storage.seed_samples);
        // defaults still apply for unset fields
        assert!(config.images.cache_dir.ends_with("icons"));
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = AidexConfig::default();
        std::env::set_var("AIDEX_DB", "/tmp/override.db");
        std::env::set_var("AIDEX_LOG_LEVEL", "trace");
        std::env::set_var("AIDEX_SEED_SAMPLES", "1");

        config.apply_env_overrides();

        assert_eq!(config.storage.db_path, "/tmp/override.db");
        assert_eq!(config.log_level, "trace");
        assert!(config.storage.seed_samples);

        // Clean up
        std::env::remove_var("AIDEX_DB");
        std::env::remove_var("AIDEX_LOG_LEVEL");
        std::env::remove_var("AIDEX_SEED_SAMPLES");
    }
}
