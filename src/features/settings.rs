//! Application settings persistence
//!
//! Every field has a compiled-in default; the JSON file only needs the
//! values it overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::slider::SliderConfig;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Slider geometry and feel
    pub slider: SliderConfig,
    /// Background image behind the slider
    pub background: BackgroundSettings,
    /// Initial window size
    pub window: WindowSettings,
}

/// Background image settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundSettings {
    /// Image to show behind the slider, built-in backdrop when unset
    pub image_path: Option<PathBuf>,
    /// Gaussian blur sigma applied to the image
    pub blur_sigma: f32,
}

/// Window settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            image_path: None,
            blur_sigma: 10.0,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "elastic-slider", "ElasticSlider")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) => {
                tracing::info!("No settings at {} ({}), using defaults", path.display(), e);
                let settings = Self::default();
                if !path.exists() {
                    if let Err(e) = settings.save() {
                        tracing::warn!("Failed to write default settings: {}", e);
                    }
                }
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    ///
    /// A slider section that cannot drive the mapping is replaced by the
    /// defaults; the rest of the file is kept.
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        let mut settings: Self =
            serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))?;

        if let Err(reason) = settings.slider.validate() {
            tracing::warn!("Invalid slider settings ({}), using defaults", reason);
            settings.slider = SliderConfig::default();
        }

        Ok(settings)
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("elastic-slider-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_defaults_match_control_center_slider() {
        let settings = Settings::default();
        assert_eq!(settings.slider.track_width, 90.0);
        assert_eq!(settings.slider.track_height, 200.0);
        assert_eq!(settings.slider.corner_radius, 20.0);
        assert_eq!(settings.slider.stretch, 0.3);
        assert_eq!(settings.slider.release.response, 0.3);
        assert_eq!(settings.slider.release.damping_fraction, 0.8);
        assert_eq!(settings.background.blur_sigma, 10.0);
        assert!(settings.background.image_path.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "slider": { "stretch": 0.5 } }"#).unwrap();
        assert_eq!(settings.slider.stretch, 0.5);
        assert_eq!(settings.slider.track_height, 200.0);
        assert_eq!(settings.window, WindowSettings::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_file("round_trip/settings.json");
        let mut settings = Settings::default();
        settings.background.image_path = Some(PathBuf::from("/tmp/wallpaper.jpg"));
        settings.slider.track_height = 320.0;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_invalid_slider_section_falls_back() {
        let path = temp_file("invalid/settings.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            r#"{ "slider": { "track_height": -5.0 }, "window": { "width": 800.0 } }"#,
        )
        .unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.slider, SliderConfig::default());
        assert_eq!(loaded.window.width, 800.0);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let missing = temp_file("missing/settings.json");
        assert!(matches!(
            Settings::load_from_file(&missing),
            Err(SettingsError::Io(_))
        ));

        let broken = temp_file("broken/settings.json");
        std::fs::create_dir_all(broken.parent().unwrap()).unwrap();
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(&broken),
            Err(SettingsError::Parse(_))
        ));

        let _ = std::fs::remove_dir_all(broken.parent().unwrap());
    }
}
