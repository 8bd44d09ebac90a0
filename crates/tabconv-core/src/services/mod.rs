//! Domain services that orchestrate ports.

mod settings_service;

pub use settings_service::SettingsService;
