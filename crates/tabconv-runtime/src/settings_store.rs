//! JSON file implementation of the `SettingsRepository` trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tabconv_core::paths::settings_path;
use tabconv_core::{PathError, RepositoryError, Settings, SettingsRepository};
use tracing::debug;

/// Stores settings as one pretty-printed JSON document.
///
/// A missing file reads as the defaults. Writes go to a sibling temp file
/// first and are renamed into place.
#[derive(Debug, Clone)]
pub struct JsonSettingsRepository {
    path: PathBuf,
}

impl JsonSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository at the standard settings location.
    pub fn at_default_location() -> Result<Self, PathError> {
        Ok(Self::new(settings_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsRepository for JsonSettingsRepository {
    async fn load(&self) -> Result<Settings, RepositoryError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file, using defaults");
                return Ok(Settings::with_defaults());
            }
            Err(e) => return Err(RepositoryError::Storage(e.to_string())),
        };

        serde_json::from_str(&raw).map_err(|e| {
            RepositoryError::Serialization(format!("{}: {e}", self.path.display()))
        })
    }

    async fn save(&self, settings: &Settings) -> Result<(), RepositoryError> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}

/// Apply executable path overrides from the process environment.
pub fn apply_env_overrides(settings: &mut Settings) {
    settings.apply_overrides(|key| std::env::var(key).ok());
}
