// SPDX-License-Identifier: GPL-3.0-only

//! Persisted boolean settings for the AR camera application
//!
//! Each setting is a simple on/off toggle read by the UI thread and consumed
//! by the render loop at the start of the next frame. Values are stored as a
//! JSON file under the user config directory and written through on every
//! `set_*` call.

use crate::constants::{APP_CONFIG_DIR, SETTINGS_FILE};
use crate::errors::SettingsError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Boolean feature toggles persisted across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Occlude virtual content behind real-world geometry using the depth map
    pub depth_occlusion: bool,
    /// Place anchors immediately, before full tracking is established
    pub instant_placement: bool,
    /// Electronic image stabilization for the camera feed
    pub image_stabilization: bool,
    /// Draw the depth-visualization overlay instead of the camera feed
    pub depth_visualization: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            depth_occlusion: true,
            instant_placement: true,
            image_stabilization: false,
            depth_visualization: false,
        }
    }
}

/// Settings plus the file they persist to
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Open the store at an explicit path, loading existing values or
    /// starting from defaults when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let settings = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = ?path, "No settings file, using defaults");
                Settings::default()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, settings })
    }

    /// Open the store at the standard per-user location
    /// (`$XDG_CONFIG_HOME/ar-camera/settings.json` on Linux).
    pub fn open_default() -> Result<Self, SettingsError> {
        let dir = dirs::config_dir()
            .ok_or_else(|| SettingsError::Io("no user config directory".to_string()))?
            .join(APP_CONFIG_DIR);
        Self::open(dir.join(SETTINGS_FILE))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current values
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn depth_occlusion(&self) -> bool {
        self.settings.depth_occlusion
    }

    pub fn instant_placement(&self) -> bool {
        self.settings.instant_placement
    }

    pub fn image_stabilization(&self) -> bool {
        self.settings.image_stabilization
    }

    pub fn depth_visualization(&self) -> bool {
        self.settings.depth_visualization
    }

    pub fn set_depth_occlusion(&mut self, enabled: bool) -> Result<(), SettingsError> {
        self.settings.depth_occlusion = enabled;
        self.save()
    }

    pub fn set_instant_placement(&mut self, enabled: bool) -> Result<(), SettingsError> {
        self.settings.instant_placement = enabled;
        self.save()
    }

    pub fn set_image_stabilization(&mut self, enabled: bool) -> Result<(), SettingsError> {
        self.settings.image_stabilization = enabled;
        self.save()
    }

    pub fn set_depth_visualization(&mut self, enabled: bool) -> Result<(), SettingsError> {
        self.settings.depth_visualization = enabled;
        self.save()
    }

    fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.settings)?;
        std::fs::write(&self.path, contents)?;
        debug!(path = ?self.path, "Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.depth_occlusion);
        assert!(settings.instant_placement);
        assert!(!settings.image_stabilization);
        assert!(!settings.depth_visualization);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        // A file written by an older version may miss newer fields
        let settings: Settings = serde_json::from_str(r#"{"depth_occlusion": false}"#).unwrap();
        assert!(!settings.depth_occlusion);
        assert!(settings.instant_placement);
    }
}
