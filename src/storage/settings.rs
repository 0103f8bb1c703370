//! Settings storage
//!
//! Manages persistence of user preferences and application settings.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Languages the assistant ships conversations for
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "hi", "ta", "mr", "bn", "te"];

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Assistant language, one of [`SUPPORTED_LANGUAGES`]
    #[serde(default = "default_language")]
    pub language: String,
    /// UI theme: "dark" or "light"
    pub theme: String,
    /// Delay before the assistant answers a free-form message, in milliseconds
    pub response_delay_ms: u64,
    /// Delay between scripted conversation lines, in milliseconds
    pub flow_message_delay_ms: u64,
    /// Whether first-run onboarding has been completed
    #[serde(default)]
    pub onboarded: bool,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            theme: "dark".to_string(),
            response_delay_ms: 800,
            flow_message_delay_ms: 1500,
            onboarded: false,
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Ensures all parameters are within acceptable ranges.
    pub fn validate(&mut self) {
        if !SUPPORTED_LANGUAGES.contains(&self.language.as_str()) {
            self.language = default_language();
        }

        if self.theme != "dark" && self.theme != "light" {
            self.theme = "dark".to_string();
        }

        // Cap delays so a corrupted file cannot freeze the assistant
        self.response_delay_ms = self.response_delay_ms.min(10_000);
        self.flow_message_delay_ms = self.flow_message_delay_ms.min(10_000);
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match load_settings_internal() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Internal settings loading with error propagation
fn load_settings_internal() -> Result<AppSettings, StorageError> {
    let path = get_settings_path()?;
    load_settings_from(&path)
}

/// Load settings from a specific file
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;

    // Validate loaded settings
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    let path = get_settings_path()?;
    save_settings_to(settings, &path)
}

/// Save settings to a specific file
pub fn save_settings_to(settings: &AppSettings, path: &Path) -> Result<(), StorageError> {
    // Ensure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.language, "en");
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.response_delay_ms, 800);
        assert_eq!(settings.flow_message_delay_ms, 1500);
        assert!(!settings.onboarded);
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings::default();

        // Unknown language falls back to English
        settings.language = "xx".to_string();
        settings.validate();
        assert_eq!(settings.language, "en");

        // Invalid theme
        settings.theme = "invalid".to_string();
        settings.validate();
        assert_eq!(settings.theme, "dark");

        // Delay capping
        settings.response_delay_ms = 120_000;
        settings.flow_message_delay_ms = 120_000;
        settings.validate();
        assert_eq!(settings.response_delay_ms, 10_000);
        assert_eq!(settings.flow_message_delay_ms, 10_000);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = AppSettings::default();

        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: AppSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(settings.language, deserialized.language);
        assert_eq!(settings.theme, deserialized.theme);
        assert_eq!(settings.response_delay_ms, deserialized.response_delay_ms);
    }

    #[test]
    fn test_settings_persistence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = AppSettings::default();
        settings.language = "hi".to_string();
        settings.onboarded = true;
        save_settings_to(&settings, &path).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.language, "hi");
        assert!(loaded.onboarded);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.json");

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.language, "en");
        assert!(!loaded.onboarded);
    }

    #[test]
    fn test_onboarded_defaults_when_absent() {
        // Settings written by an older version lack the onboarded flag
        let json = r#"{"language":"en","theme":"dark","response_delay_ms":800,"flow_message_delay_ms":1500}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert!(!settings.onboarded);
    }
}
