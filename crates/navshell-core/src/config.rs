//! Configuration for navshell hosts.
//!
//! The core itself is configured purely in memory (the screen registry); this
//! file-backed configuration describes how a host maps its environment onto
//! viewport samples and how chrome is drawn.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::viewport::{PlatformKind, ViewportSample};

/// Main configuration for navshell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Platform kind reported in viewport samples.
    #[serde(default)]
    pub platform: PlatformKind,

    /// Logical pixels per terminal column.
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,

    /// Logical pixels per terminal row.
    #[serde(default = "default_cell_height_px")]
    pub cell_height_px: u32,

    /// Icon style for navigation chrome.
    #[serde(default)]
    pub icons: IconStyle,
}

fn default_cell_width_px() -> u32 {
    10
}

fn default_cell_height_px() -> u32 {
    20
}

/// Icon style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconStyle {
    /// Nerd Font glyphs.
    Nerd,
    /// Standard Unicode symbols.
    #[default]
    Unicode,
    /// ASCII only (also used with `NO_COLOR`).
    Ascii,
}

impl ShellConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Force ASCII icons when `NO_COLOR` is set.
    #[must_use]
    pub fn with_env(mut self) -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            self.icons = IconStyle::Ascii;
        }
        self
    }

    /// Convert a terminal size in cells to a viewport sample.
    pub fn sample_for_cells(&self, columns: u16, rows: u16) -> ViewportSample {
        ViewportSample::new(
            u32::from(columns).saturating_mul(self.cell_width_px),
            u32::from(rows).saturating_mul(self.cell_height_px),
            self.platform,
        )
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            platform: PlatformKind::default(),
            cell_width_px: default_cell_width_px(),
            cell_height_px: default_cell_height_px(),
            icons: IconStyle::default(),
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
