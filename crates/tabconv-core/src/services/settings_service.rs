//! Settings service - validated reads and writes through the repository.

use std::sync::Arc;

use tracing::info;

use crate::ports::{CoreError, SettingsRepository};
use crate::settings::{Settings, SettingsUpdate, validate_settings};

/// Service for settings operations.
#[derive(Clone)]
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Current settings as stored (defaults when nothing is stored).
    pub async fn get(&self) -> Result<Settings, CoreError> {
        Ok(self.repo.load().await?)
    }

    /// Apply a partial update. Nothing is written if the result is invalid.
    pub async fn update(&self, update: &SettingsUpdate) -> Result<Settings, CoreError> {
        let mut current = self.repo.load().await?;
        current.merge(update);
        validate_settings(&current)?;
        self.repo.save(&current).await?;
        info!("Settings updated");
        Ok(current)
    }

    /// Replace stored settings with the defaults.
    pub async fn reset(&self) -> Result<Settings, CoreError> {
        let defaults = Settings::with_defaults();
        self.repo.save(&defaults).await?;
        info!("Settings reset to defaults");
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct InMemorySettingsRepo {
        settings: Mutex<Settings>,
    }

    impl InMemorySettingsRepo {
        fn new() -> Self {
            Self {
                settings: Mutex::new(Settings::with_defaults()),
            }
        }
    }

    #[async_trait]
    impl SettingsRepository for InMemorySettingsRepo {
        async fn load(&self) -> Result<Settings, RepositoryError> {
            Ok(self.settings.lock().unwrap().clone())
        }

        async fn save(&self, settings: &Settings) -> Result<(), RepositoryError> {
            *self.settings.lock().unwrap() = settings.clone();
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_update_persists() {
        let service = SettingsService::new(Arc::new(InMemorySettingsRepo::new()));

        let update = SettingsUpdate {
            transcoder_path: Some(Some("/usr/bin/ffmpeg".to_string())),
            ..Default::default()
        };
        let updated = service.update(&update).await.unwrap();
        assert_eq!(updated.transcoder_path.as_deref(), Some("/usr/bin/ffmpeg"));

        let fetched = service.get().await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_invalid_update_is_not_saved() {
        let service = SettingsService::new(Arc::new(InMemorySettingsRepo::new()));

        let update = SettingsUpdate {
            output_suffix: Some(Some(String::new())),
            ..Default::default()
        };
        assert!(matches!(
            service.update(&update).await,
            Err(CoreError::Settings(_))
        ));
        assert_eq!(
            service.get().await.unwrap().output_suffix.as_deref(),
            Some("-converted")
        );
    }

    #[tokio::test]
    async fn test_reset() {
        let service = SettingsService::new(Arc::new(InMemorySettingsRepo::new()));
        service
            .update(&SettingsUpdate {
                max_resolution: Some(Some(240)),
                ..Default::default()
            })
            .await
            .unwrap();

        let reset = service.reset().await.unwrap();
        assert_eq!(reset, Settings::with_defaults());
        assert_eq!(service.get().await.unwrap().max_resolution, Some(480));
    }
}
