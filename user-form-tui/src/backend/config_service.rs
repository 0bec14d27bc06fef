//! Config service

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use user_form_core::api::DEFAULT_BASE_URL;

/// Environment variable overriding the backend URL
pub const API_URL_ENV: &str = "USER_FORM_API_URL";

const APP_DIR: &str = "user-form";
const CONFIG_FILE: &str = "config.json";

/// Application config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Base URL of the users backend
    pub api_base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Config service trait
pub trait ConfigService: Send + Sync {
    fn load(&self) -> Result<AppConfig>;

    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// JSON file under the platform config directory
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// `<config_dir>/user-form/config.json`, or the working directory when the
    /// platform has no config directory
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Config as stored on disk, without environment overrides
    fn read_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", self.path.display()))
    }
}

/// Replace the base URL with a non-blank `url`
fn apply_url_override(mut config: AppConfig, url: Option<String>) -> AppConfig {
    if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
        config.api_base_url = url;
    }
    config
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let config = self.read_file()?;
        Ok(apply_url_override(config, std::env::var(API_URL_ENV).ok()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(config)?)?;
        Ok(())
    }
}
