use crate::error::{OtbError, Result};
use otb_helper_common::{ViewMode, DEFAULT_MAX_RESULTS, SEARCH_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const BASE_URL_ENV: &str = "OTB_HELPER_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub max_results: u32,
    pub timeout_seconds: u64,
    pub view: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            max_results: DEFAULT_MAX_RESULTS,
            timeout_seconds: u64::from(SEARCH_TIMEOUT_MS / 1000),
            view: ViewMode::default().as_str().into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| OtbError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("otb-helper").join("config.json"))
    }

    /// Cart blob location, under the platform data dir
    pub fn cart_path() -> Result<PathBuf> {
        let data = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| OtbError::Config("data directory not found".into()))?;
        Ok(data.join("otb-helper").join("cart.json"))
    }

    /// `--base-url`, then `OTB_HELPER_URL`, then the config file
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> String {
        let env = std::env::var(BASE_URL_ENV).ok();
        pick_base_url(cli_override, env.as_deref(), &self.base_url)
    }

    pub fn view_mode(&self) -> ViewMode {
        ViewMode::from_stored(Some(&self.view))
    }

    pub fn set_view(&mut self, raw: &str) -> Result<()> {
        let mode = ViewMode::parse(raw).ok_or_else(|| OtbError::InvalidView(raw.to_string()))?;
        self.view = mode.as_str().into();
        Ok(())
    }

    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(OtbError::Config("base URL must not be empty".into()));
        }
        self.base_url = url.to_string();
        Ok(())
    }
}

fn pick_base_url(cli: Option<&str>, env: Option<&str>, configured: &str) -> String {
    [cli, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(configured)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.max_results, 3);
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.view_mode(), ViewMode::Cards);
    }

    #[test]
    fn test_base_url_precedence() {
        assert_eq!(pick_base_url(Some("http://a/"), Some("http://b"), "http://c"), "http://a");
        assert_eq!(pick_base_url(None, Some("http://b"), "http://c"), "http://b");
        assert_eq!(pick_base_url(Some("  "), None, "http://c/"), "http://c");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("otb").join("config.json");

        let mut config = Config::default();
        config.set_view("table").unwrap();
        config.set_base_url("http://example.test:9000/").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.view_mode(), ViewMode::Table);
        assert_eq!(loaded.base_url, "http://example.test:9000");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"view":"table"}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.view_mode(), ViewMode::Table);
        assert_eq!(loaded.max_results, 3);
    }

    #[test]
    fn test_invalid_view_rejected() {
        let mut config = Config::default();
        assert!(matches!(config.set_view("grid"), Err(OtbError::InvalidView(_))));
    }
}
