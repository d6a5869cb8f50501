use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};
use super::theme::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Theme used at startup; updated whenever the user toggles it.
    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_line_numbers")]
    pub line_numbers_enabled: bool,
}

const MIN_FONT_SIZE: i32 = 6;
const MAX_FONT_SIZE: i32 = 96;

fn default_font_size() -> u32 {
    12
}

fn default_word_wrap() -> bool {
    true
}

fn default_line_numbers() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_size: default_font_size(),
            word_wrap_enabled: default_word_wrap(),
            line_numbers_enabled: default_line_numbers(),
        }
    }
}

impl AppSettings {
    /// Font size for FLTK, clamped to a usable range.
    pub fn font_size_px(&self) -> i32 {
        i32::try_from(self.font_size)
            .unwrap_or(MAX_FONT_SIZE)
            .clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    }

    /// Load settings from disk, or fall back to defaults
    pub fn load() -> Self {
        match Self::get_config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("No config directory available. Using default settings.");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings at {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            // First run: nothing saved yet
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::get_config_path()
            .ok_or_else(|| AppError::Settings("no config directory available".to_string()))?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("notepad");
        path.push("settings.json");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.font_size, 12);
        assert!(settings.word_wrap_enabled);
        assert!(settings.line_numbers_enabled);
    }

    #[test]
    fn test_font_size_px_is_clamped() {
        let mut settings = AppSettings::default();
        assert_eq!(settings.font_size_px(), 12);
        settings.font_size = u32::MAX;
        assert_eq!(settings.font_size_px(), 96);
        settings.font_size = 0;
        assert_eq!(settings.font_size_px(), 6);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"theme": "Light"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.font_size, 12);
        assert!(settings.line_numbers_enabled);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            theme: Theme::Light,
            font_size: 18,
            word_wrap_enabled: false,
            line_numbers_enabled: true,
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppSettings::load_from(&dir.path().join("settings.json"));
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_load_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not valid json").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }
}
