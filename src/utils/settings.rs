//! Settings and configuration utilities.
//!
//! Credentials and other inputs can be supplied through
//! `$HOME/.release-prep/settings.json` as a fallback for environment
//! variables, so CI secrets and local development use the same lookup path.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings loaded from `$HOME/.release-prep/settings.json`.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Environment variable fallbacks.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    ///
    /// A missing file is not an error; it yields empty settings so a bare
    /// environment still works.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Settings {
                env: HashMap::new(),
            });
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Settings>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".release-prep").join("settings.json"))
    }

    /// Returns an environment variable with fallback to these settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(_) => self.env.get(key).cloned(),
        }
    }
}

/// Returns an environment variable, consulting the settings file as fallback.
pub fn get_env_var(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => match Settings::load() {
            Ok(settings) => settings
                .env
                .get(key)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Environment variable not found: {}", key)),
            Err(_) => Err(anyhow::anyhow!("Environment variable not found: {}", key)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_settings_file_yields_empty_settings() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = Settings::load_from_path(dir.path().join("settings.json"))
            .expect("load should tolerate a missing file");
        assert!(settings.env.is_empty());
    }

    #[test]
    fn settings_env_is_a_fallback_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"env": {"RELEASE_PREP_TEST_ONLY": "from-file"}}"#)
            .expect("write settings");

        let settings = Settings::load_from_path(&path).expect("load settings");
        assert_eq!(
            settings.get_env_var("RELEASE_PREP_TEST_ONLY").as_deref(),
            Some("from-file")
        );
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").expect("write settings");

        assert!(Settings::load_from_path(&path).is_err());
    }
}
