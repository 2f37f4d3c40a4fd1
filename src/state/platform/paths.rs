//! Where ParsePoint keeps its files.
//!
//! The config file lives under the OS config directory (`~/.config/parsepoint`
//! on Linux) and the log under the data directory (`~/.local/share/parsepoint`).

use color_eyre::Result;
use color_eyre::eyre::eyre;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "parsepoint";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "parsepoint.log";

/// Config and log locations, either under the OS directories or under a
/// single fixed root.
#[derive(Debug, Clone, Default)]
pub struct AppPaths {
    root: Option<PathBuf>,
}

impl AppPaths {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts both files directly inside `root`.
    #[must_use]
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// # Errors
    ///
    /// Fails when the OS has no config directory or it cannot be created.
    pub fn config_file(&self) -> Result<PathBuf> {
        let dir = self.dir_for("config", dirs::config_dir)?;
        Ok(dir.join(CONFIG_FILE_NAME))
    }

    /// # Errors
    ///
    /// Fails when the OS has no data directory or it cannot be created.
    pub fn log_file(&self) -> Result<PathBuf> {
        let dir = self.dir_for("data", dirs::data_dir)?;
        Ok(dir.join(LOG_FILE_NAME))
    }

    fn dir_for(&self, kind: &str, base: fn() -> Option<PathBuf>) -> Result<PathBuf> {
        let dir = match &self.root {
            Some(root) => root.clone(),
            None => base()
                .ok_or_else(|| eyre!("no {kind} directory on this platform"))?
                .join(APP_NAME),
        };
        ensure_dir(&dir)?;
        Ok(dir)
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| eyre!("cannot create {}: {e}", dir.display()))
}
