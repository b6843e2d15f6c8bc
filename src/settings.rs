//! Interaction settings.
//!
//! Settings are stored as JSON in `<config_dir>/whitecanvas/interaction.json`.
//! Missing fields fall back to their defaults, so partial files are valid.

use crate::constants::{DEFAULT_THROTTLE_MS, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME, SLOW_DISPATCH_MS};
use crate::error::CanvasResult;
use crate::input::SlotOptions;
use crate::layer::OverlayStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Settings shared by a canvas and every tool attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Throttle window for tool gesture slots in milliseconds (0 = off)
    pub throttle_ms: u64,
    /// Process the first move of a burst immediately when throttling
    pub leading: bool,
    /// Abandon a gesture that received no event for this long
    pub gesture_timeout_ms: Option<u64>,
    /// Dispatch time above which `emit` logs a warning
    pub slow_dispatch_ms: f64,
    /// Default style of selection overlays
    pub overlay: OverlayStyle,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_THROTTLE_MS,
            leading: true,
            gesture_timeout_ms: None,
            slow_dispatch_ms: SLOW_DISPATCH_MS,
            overlay: OverlayStyle::default(),
        }
    }
}

impl InteractionSettings {
    /// Default location of the settings file, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Load settings from the default location.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file
    /// is logged and also yields the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "No interaction settings file, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load interaction settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> CanvasResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> CanvasResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn gesture_timeout(&self) -> Option<Duration> {
        self.gesture_timeout_ms.map(Duration::from_millis)
    }

    /// Slot options for tool gesture slots
    pub fn slot_options(&self) -> SlotOptions {
        SlotOptions {
            throttle_ms: self.throttle_ms,
            leading: self.leading,
        }
    }
}
