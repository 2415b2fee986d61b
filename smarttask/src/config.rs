use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "smarttask";
const ENV_API_KEY: &str = "SMARTTASK_API_KEY";
const ENV_PROJECT_ID: &str = "SMARTTASK_PROJECT_ID";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmartTaskConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub reminders: ReminderConfig,
}

/// Where tasks live: `{base_url}/projects/{project_id}/databases/{database}/documents/{collection}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// When false, reminders are silently dropped.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_base_url() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

fn default_database() -> String {
    "(default)".to_string()
}

fn default_collection() -> String {
    "tasks".to_string()
}

fn default_page_size() -> u32 {
    300
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            project_id: String::new(),
            database: default_database(),
            collection: default_collection(),
            api_key: String::new(),
            bearer_token: None,
            page_size: default_page_size(),
        }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SmartTaskConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join(APP_DIR)
            .join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(dirs::data_local_dir()
            .or_else(dirs::config_dir)
            .context("Cannot determine data directory")?
            .join(APP_DIR)
            .join("smarttask.log"))
    }

    /// Load config from disk, then apply environment overrides.
    /// Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            Self::parse(&raw)
                .with_context(|| format!("Failed to parse config at {}", path.display()))?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            self.store.api_key = key;
        }
        if let Some(project) = lookup(ENV_PROJECT_ID).filter(|v| !v.is_empty()) {
            self.store.project_id = project;
        }
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    /// Path of the config file, writing a default one first if missing.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default().save()?;
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = SmartTaskConfig::parse("").unwrap();
        assert_eq!(cfg.store.collection, "tasks");
        assert_eq!(cfg.store.database, "(default)");
        assert_eq!(cfg.store.page_size, 300);
        assert!(cfg.reminders.enabled);
    }

    #[test]
    fn partial_store_section_keeps_other_defaults() {
        let cfg = SmartTaskConfig::parse(
            r#"
            [store]
            project_id = "smart-task-123"

            [reminders]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(cfg.store.project_id, "smart-task-123");
        assert_eq!(cfg.store.base_url, "https://firestore.googleapis.com/v1");
        assert!(!cfg.reminders.enabled);
    }

    #[test]
    fn env_overrides_win_over_file() {
        let mut cfg = SmartTaskConfig::parse("[store]\napi_key = \"from-file\"").unwrap();
        cfg.apply_overrides(|key| match key {
            ENV_API_KEY => Some("from-env".to_string()),
            ENV_PROJECT_ID => Some(String::new()),
            _ => None,
        });

        assert_eq!(cfg.store.api_key, "from-env");
        assert_eq!(cfg.store.project_id, "");
    }

    #[test]
    fn default_config_serializes_back() {
        let raw = toml::to_string_pretty(&SmartTaskConfig::default()).unwrap();
        let parsed = SmartTaskConfig::parse(&raw).unwrap();
        assert_eq!(parsed.store.collection, "tasks");
    }
}
