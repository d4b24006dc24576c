//! Configuration management for tasklist.
//!
//! Settings are resolved in three layers, lowest precedence first:
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. A JSON config file, either given explicitly or found at
//!    `{config_dir}/tasklist/config.json`
//! 3. Command line flags and environment variables ([`ConfigOverrides`])
//!
//! # Example config.json
//!
//! ```json
//! {
//!   "file": "/home/me/todo.txt",
//!   "spaced": false,
//!   "color": true
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::codec::RecordLayout;
use crate::error::{Result, TaskListError};

/// Task file used when nothing else is configured.
pub const DEFAULT_TASK_FILE: &str = "Task List";

/// Resolved settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the task file.
    pub file: PathBuf,

    /// Write a blank line after every record, as older versions did.
    pub spaced: bool,

    /// Highlight warnings when the output is a terminal.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_TASK_FILE),
            spaced: false,
            color: true,
        }
    }
}

/// Values supplied on the command line; `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub file: Option<PathBuf>,
    pub spaced: Option<bool>,
    pub color: Option<bool>,
}

impl Config {
    /// Get the default user config path using the platform's config directory.
    ///
    /// Returns `None` if the config directory cannot be determined.
    #[must_use]
    pub fn default_user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tasklist").join("config.json"))
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TaskListError::config_with_path(
                format!("config file not found: {}", path.display()),
                path.to_path_buf(),
            ));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content).map_err(|e| {
            TaskListError::config_with_path(
                format!("failed to parse {}: {e}", path.display()),
                path.to_path_buf(),
            )
        })?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit `path` must exist. Without one, the user config file is
    /// read if present and defaults are used otherwise.
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let base = match path {
            Some(path) => Self::load(path)?,
            None => match Self::default_user_path().filter(|p| p.exists()) {
                Some(user_path) => {
                    debug!("Using user config at {}", user_path.display());
                    Self::load(&user_path)?
                }
                None => Self::default(),
            },
        };

        let config = base.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Layer command line overrides on top of this configuration.
    #[must_use]
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(file) = overrides.file {
            self.file = file;
        }
        if let Some(spaced) = overrides.spaced {
            self.spaced = spaced;
        }
        if let Some(color) = overrides.color {
            self.color = color;
        }
        self
    }

    /// Reject settings that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.file.as_os_str().is_empty() {
            return Err(TaskListError::InvalidConfig {
                field: "file".to_string(),
                reason: "task file path must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Record layout implied by the `spaced` setting.
    #[must_use]
    pub fn record_layout(&self) -> RecordLayout {
        if self.spaced {
            RecordLayout::Spaced
        } else {
            RecordLayout::Compact
        }
    }
}
