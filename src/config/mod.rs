// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences in a `settings.toml` file.
//!
//! Besides the usual language and theme choices, the file carries the two
//! animation knobs that existed as divergent constants in early revisions of
//! the layout: the pinched-mode stack spacing and the count-up duration.
//! Absent or unparseable files degrade to defaults.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TabDeck";

/// Stack spacing (card overlap) applied in the pinched, grouped view.
///
/// An alternate revision of the original layout used -185.0; -145.0 is the
/// canonical value and the other remains reachable through this setting.
pub const DEFAULT_PINCHED_STACK_SPACING: f32 = -145.0;

/// Total duration of the count-up animation, in milliseconds.
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 800;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub pinched_stack_spacing: Option<f32>,
    #[serde(default)]
    pub counter_duration_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
            pinched_stack_spacing: Some(DEFAULT_PINCHED_STACK_SPACING),
            counter_duration_ms: Some(DEFAULT_COUNTER_DURATION_MS),
        }
    }
}

impl Config {
    /// Effective pinched stack spacing, falling back to the canonical value.
    ///
    /// Positive values would pull cards apart instead of overlapping them,
    /// so anything above zero is treated as absent.
    #[must_use]
    pub fn pinched_stack_spacing(&self) -> f32 {
        match self.pinched_stack_spacing {
            Some(value) if value <= 0.0 => value,
            _ => DEFAULT_PINCHED_STACK_SPACING,
        }
    }

    /// Effective count-up duration.
    #[must_use]
    pub fn counter_duration(&self) -> std::time::Duration {
        let ms = match self.counter_duration_ms {
            Some(ms) if ms > 0 => ms,
            _ => DEFAULT_COUNTER_DURATION_MS,
        };
        std::time::Duration::from_millis(ms)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
