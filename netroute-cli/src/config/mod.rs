//! Application configuration
//!
//! Loaded from `<config dir>/netroute/config.toml` when present, then
//! overridden by environment variables (a `.env` file is honored):
//!
//! - `NETROUTE_DATABASE`: path to the SQLite store
//! - `NETROUTE_DEFAULT_REGION`: region used by `ingest` when `--region` is omitted
//! - `NETROUTE_LOG_LEVEL`: default log filter when `RUST_LOG` is unset

pub mod repository;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "netroute";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_path: PathBuf,
    pub default_region: Option<String>,
    pub route_list_limit: u32,
    /// Substring identifying the worksheet to ingest
    pub sheet_hint: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .map(|d| d.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("data"));

        Self {
            database_path: data_dir.join("regional_data.db"),
            default_region: None,
            route_list_limit: 100,
            sheet_hint: "summary1".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Location of the config file, if the platform has a config directory
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Load config file (if any) and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                Self::from_toml_str(&content)
                    .with_context(|| format!("Invalid config file: {}", path.display()))?
            }
            _ => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config TOML")
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = non_empty("NETROUTE_DATABASE") {
            self.database_path = PathBuf::from(path);
        }
        if let Some(region) = non_empty("NETROUTE_DEFAULT_REGION") {
            self.default_region = Some(region);
        }
        if let Some(level) = non_empty("NETROUTE_LOG_LEVEL") {
            self.log_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            database_path = "/srv/netroute/routes.db"
            default_region = "Eastern"
            "#,
        )
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/srv/netroute/routes.db"));
        assert_eq!(config.default_region.as_deref(), Some("Eastern"));
        assert_eq!(config.route_list_limit, 100);
        assert_eq!(config.sheet_hint, "summary1");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::from_toml_str("route_list_limit = \"many\"").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("NETROUTE_DATABASE", "/tmp/override.db"),
            ("NETROUTE_DEFAULT_REGION", "EM"),
            ("NETROUTE_LOG_LEVEL", " "),
        ]);

        let mut config = Config::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.database_path, PathBuf::from("/tmp/override.db"));
        assert_eq!(config.default_region.as_deref(), Some("EM"));
        assert_eq!(config.log_level, "info");
    }
}
