//! Configuration service implementation.
//!
//! Loads `WizardConfig` from `~/.config/msgwiz/config.toml` (or an explicit
//! path) and applies `MSGWIZ_*` environment overrides on top.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use msgwiz_core::config::{BackendMode, WizardConfig};
use msgwiz_core::error::{Result, WizardError};

use crate::paths::WizardPaths;

pub const ENV_BACKEND_MODE: &str = "MSGWIZ_BACKEND_MODE";
pub const ENV_API_BASE_URL: &str = "MSGWIZ_API_BASE_URL";
pub const ENV_MOCK_DELAY_MS: &str = "MSGWIZ_MOCK_DELAY_MS";

/// Configuration service that loads and caches the wizard configuration.
///
/// A missing file is not an error: defaults are used. A present but
/// malformed file is.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<WizardConfig>>>,
}

impl ConfigService {
    /// Uses the default config path.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Uses an explicit config file (CLI flag, tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<WizardConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let path = match &self.path {
            Some(path) => path.clone(),
            None => WizardPaths::config_file()?,
        };
        let mut loaded = Self::load_file(&path)?;
        apply_env_overrides(&mut loaded, |key| std::env::var(key).ok())?;

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    fn load_file(path: &Path) -> Result<WizardConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "[ConfigService] no config file, using defaults");
            return Ok(WizardConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: WizardConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "[ConfigService] config loaded");
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies `MSGWIZ_*` overrides read through `lookup`.
pub fn apply_env_overrides(
    config: &mut WizardConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(mode) = lookup(ENV_BACKEND_MODE) {
        config.backend.mode = mode
            .parse::<BackendMode>()
            .map_err(|_| WizardError::config(format!("{ENV_BACKEND_MODE}: unknown mode '{mode}'")))?;
    }
    if let Some(url) = lookup(ENV_API_BASE_URL)
        && !url.is_empty()
    {
        config.backend.base_url = url;
    }
    if let Some(delay) = lookup(ENV_MOCK_DELAY_MS) {
        config.backend.mock_delay_ms = delay
            .parse()
            .map_err(|_| WizardError::config(format!("{ENV_MOCK_DELAY_MS}: not a number '{delay}'")))?;
    }
    Ok(())
}
