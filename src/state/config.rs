//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing application
//! settings with automatic load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/parsepoint/config.json`
//! - macOS: `~/Library/Application Support/parsepoint/config.json`
//! - Windows: `%APPDATA%/parsepoint/config.json`
//!
//! Only the theme is written back at runtime; the endpoint, schema and
//! timeout are read from the file and may be overridden per session on the
//! command line.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::domain::ResponseSchema;
use crate::theme::Theme;

use super::platform::paths::AppPaths;

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Colour scheme, persisted under the fixed key `theme`.
    #[serde(default)]
    pub theme: Theme,
    /// Absolute URL of the parsing endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Expected response contract of the endpoint.
    #[serde(default)]
    pub schema: ResponseSchema,
    /// Upload timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            endpoint: default_endpoint(),
            schema: ResponseSchema::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("config not loaded, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Loads the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Persists a new theme, keeping every other field as stored on disk.
    ///
    /// Session overrides of endpoint or schema never leak into the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn persist_theme(path: &Path, theme: Theme) -> Result<()> {
        let mut stored = Self::load_from(path).unwrap_or_default();
        stored.theme = theme;
        stored.save_to(path)
    }
}

// ============================================================================
// Tests
// ============================================================================
