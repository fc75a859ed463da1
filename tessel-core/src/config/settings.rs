//! Layout settings
//!
//! [`LayoutSettings`] is read from a TOML file. Every field has a default,
//! so an empty file (or no file at all) yields a working configuration.
//!
//! ```toml
//! resize_step = 0.05
//! initial_tab_name = "code"
//!
//! [keybindings.overrides]
//! "window.close" = "<C-w>q"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::keybindings::KeybindingSettings;
use crate::layout::{DEFAULT_RESIZE_STEP, DEFAULT_TAB_NAME};

/// Largest accepted resize step; anything above cannot move a ratio without
/// clamping it straight to a bound.
pub const MAX_RESIZE_STEP: f64 = 0.8;

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`LayoutSettings`].
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("invalid settings: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Result type for settings operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// User-tunable layout behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Ratio change applied by one grow/shrink command.
    pub resize_step: f64,
    /// Name of the tab opened at startup.
    pub initial_tab_name: String,
    /// Key chord overrides.
    pub keybindings: KeybindingSettings,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            resize_step: DEFAULT_RESIZE_STEP,
            initial_tab_name: DEFAULT_TAB_NAME.to_string(),
            keybindings: KeybindingSettings::default(),
        }
    }
}

impl LayoutSettings {
    /// Parses and validates settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Validation` for out-of-range values.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a settings file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise the
    /// errors of [`LayoutSettings::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded layout settings");
        Ok(settings)
    }

    /// Serializes the settings back to TOML.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if a value cannot be represented.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Checks every field, collecting all problems at once.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` listing each invalid field.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut errors = Vec::new();

        if !(self.resize_step > 0.0 && self.resize_step <= MAX_RESIZE_STEP) {
            errors.push(format!(
                "resize_step must be in (0, {MAX_RESIZE_STEP}], got {}",
                self.resize_step
            ));
        }
        if self.initial_tab_name.trim().is_empty() {
            errors.push("initial_tab_name must not be empty".to_string());
        }
        errors.extend(
            self.keybindings
                .problems()
                .into_iter()
                .map(|problem| format!("keybindings: {problem}")),
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
