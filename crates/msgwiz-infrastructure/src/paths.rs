//! Path management for msgwiz configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/msgwiz/        # Config directory (platform specific)
//! ├── config.toml          # Application configuration
//! └── catalog.toml         # Optional persona/option catalog
//! ```

use std::path::PathBuf;

use msgwiz_core::error::{Result, WizardError};

const APP_DIR: &str = "msgwiz";

/// Resolves msgwiz paths under the platform config directory.
pub struct WizardPaths;

impl WizardPaths {
    /// Returns the msgwiz configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/msgwiz/`
    /// - `Err(WizardError::Config)`: The platform config directory is unknown
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| WizardError::config("Cannot find config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the conventional location of a user catalog file.
    pub fn catalog_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("catalog.toml"))
    }
}
