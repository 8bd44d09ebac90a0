//! Settings operations for the GUI backend.

use tabconv_core::{Settings, SettingsUpdate};

use crate::deps::GuiDeps;
use crate::error::GuiError;

/// Settings operations handler.
pub struct SettingsOps<'a> {
    deps: &'a GuiDeps,
}

impl<'a> SettingsOps<'a> {
    pub(crate) const fn new(deps: &'a GuiDeps) -> Self {
        Self { deps }
    }

    /// Settings as stored, without environment overrides.
    pub async fn get(&self) -> Result<Settings, GuiError> {
        Ok(self.deps.settings().get().await?)
    }

    /// Validated partial update.
    pub async fn update(&self, update: &SettingsUpdate) -> Result<Settings, GuiError> {
        if update.is_empty() {
            return Err(GuiError::ValidationFailed("no settings to update".to_string()));
        }
        Ok(self.deps.settings().update(update).await?)
    }

    pub async fn reset(&self) -> Result<Settings, GuiError> {
        Ok(self.deps.settings().reset().await?)
    }
}
