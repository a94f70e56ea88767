use crate::utils::{ModalConfig, ModalError, Result, DEFAULT_TIMING_FUNCTION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Per-user modal defaults, stored as TOML
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub transition_duration: u64,
    pub transition_timing_function: String,
    pub is_body_overflow_disable: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transition_duration: 300,
            transition_timing_function: DEFAULT_TIMING_FUNCTION.to_string(),
            is_body_overflow_disable: false,
        }
    }
}

impl Settings {
    /// Get the platform-specific settings directory
    pub fn settings_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(any(target_os = "windows", target_os = "macos")) {
            // %APPDATA%\portal-modal or ~/Library/Application Support/portal-modal
            dirs::config_dir()
                .ok_or(ModalError::MissingDirectory("config"))?
                .join("portal-modal")
        } else {
            // Linux/Unix: $HOME/.portal-modal
            dirs::home_dir()
                .ok_or(ModalError::MissingDirectory("home"))?
                .join(".portal-modal")
        };

        Ok(config_dir)
    }

    pub fn settings_path() -> Result<PathBuf> {
        Ok(Self::settings_dir()?.join("settings.toml"))
    }

    /// Load settings from the config file, defaults if there is none
    pub fn load() -> Result<Self> {
        let path = Self::settings_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn save(&self) -> Result<()> {
        let dir = Self::settings_dir()?;

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(Self::settings_path()?, contents)?;

        Ok(())
    }

    pub fn modal_config(&self, div_id: impl Into<String>) -> ModalConfig {
        ModalConfig::new(div_id)
            .with_transition_duration(self.transition_duration)
            .with_timing_function(self.transition_timing_function.clone())
            .with_body_overflow_disable(self.is_body_overflow_disable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.transition_duration, 300);
        assert_eq!(settings.transition_timing_function, "ease");
        assert!(!settings.is_body_overflow_disable);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_toml_str("transition_timing_function = \"linear\"").unwrap();
        assert_eq!(settings.transition_duration, 300);
        assert_eq!(settings.transition_timing_function, "linear");
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let contents = toml::to_string_pretty(&Settings::default()).unwrap();
        assert_eq!(Settings::from_toml_str(&contents).unwrap(), Settings::default());
    }

    #[test]
    fn test_modal_config_from_settings() {
        let settings = Settings {
            transition_duration: 150,
            transition_timing_function: "ease-in-out".to_string(),
            is_body_overflow_disable: true,
        };
        let config = settings.modal_config("settings-modal");
        assert_eq!(config.div_id, "settings-modal");
        assert_eq!(config.transition().css(), "all 150ms ease-in-out");
        assert!(config.is_body_overflow_disable);
        assert!(!config.initial_modal_state);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(matches!(
            Settings::from_toml_str("transition_duration = \"slow\""),
            Err(ModalError::Parse(_))
        ));
    }
}
