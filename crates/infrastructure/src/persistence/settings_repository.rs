//! Editor settings persistence.
//!
//! Stores settings in the platform-specific config directory:
//! - Linux: ~/.config/querylens/settings.json
//! - macOS: ~/Library/Application Support/querylens/settings.json
//! - Windows: %APPDATA%/querylens/settings.json
//!
//! The file is pretty-printed JSON with a trailing newline, so hand edits
//! and diffs stay readable.

use std::path::{Path, PathBuf};

use querylens_domain::EditorSettings;
use tokio::fs;


/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid settings JSON.
    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for editor settings.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository for the default settings file.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Creates a repository for an explicit settings file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the default settings file location, if a config directory
    /// exists on this platform.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("querylens").join("settings.json"))
    }

    /// Returns the settings file this repository reads and writes.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<EditorSettings, SettingsError> {
        let Some(path) = &self.path else {
            return Ok(EditorSettings::default());
        };

        if !fs::try_exists(path).await? {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(EditorSettings::default());
        }

        let content = fs::read(path).await?;
        let settings = serde_json::from_slice(&content)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Saves settings to disk, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no config directory or the write fails.
    pub async fn save(&self, settings: &EditorSettings) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Err(SettingsError::NoConfigDir);
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }

        let mut content = serde_json::to_string_pretty(settings)?;
        content.push('\n');
        fs::write(path, content).await?;
        tracing::debug!(path = %path.display(), "saved settings");

        Ok(())
    }
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_default_path_is_under_querylens() {
        if let Some(p) = SettingsRepository::default_path() {
            assert!(p.ends_with("querylens/settings.json"));
        }
    }

    #[tokio::test]
    async fn test_load_returns_default_when_no_file() {
        let dir = tempdir().unwrap();
        let repo = SettingsRepository::at(dir.path().join("missing.json"));
        assert_eq!(repo.load().await.unwrap(), EditorSettings::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let repo = SettingsRepository::at(dir.path().join("nested").join("settings.json"));
        let settings = EditorSettings {
            require_http_scheme: false,
            ..EditorSettings::inspector_panel()
        };

        repo.save(&settings).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), settings);
    }

    #[tokio::test]
    async fn test_saved_file_is_pretty_with_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        SettingsRepository::at(&path)
            .save(&EditorSettings::default())
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("{\n  \"require_http_scheme\": true,"));
        assert!(written.ends_with("}\n"));
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"close_on_apply": false}"#).unwrap();

        let settings = SettingsRepository::at(path).load().await.unwrap();
        assert!(!settings.close_on_apply);
        assert!(settings.require_http_scheme);
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let result = SettingsRepository::at(path).load().await;
        assert!(matches!(result, Err(SettingsError::Json(_))));
    }
}
