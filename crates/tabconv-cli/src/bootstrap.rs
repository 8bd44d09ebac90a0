//! CLI bootstrap - the composition root.
//!
//! This is the only place concrete adapters are instantiated:
//! - JSON settings repository (tabconv-runtime)
//! - yt-dlp resolver and HTTP downloader (tabconv-download)
//! - ffmpeg runner (tabconv-runtime)
//!
//! Handlers receive a `CliContext` and talk to the `GuiBackend` facade.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tabconv_core::{Settings, SettingsService, settings_path};
use tabconv_download::{HttpDownloader, YtDlpResolver};
use tabconv_gui::{GuiBackend, GuiDeps};
use tabconv_runtime::{FfmpegRunner, JsonSettingsRepository, apply_env_overrides};
use tracing::{debug, warn};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings_file: PathBuf,
}

impl CliConfig {
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            settings_file: settings_path()?,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    pub backend: GuiBackend,
    pub settings_file: PathBuf,
}

/// Wire adapters into a backend.
///
/// The resolver path is read once here; the transcoder path is read again
/// for every conversion. An unreadable settings file only costs the
/// configured resolver path, so `config reset` can still repair it.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let repo = Arc::new(JsonSettingsRepository::new(&config.settings_file));
    let settings = SettingsService::new(repo);

    let mut effective = match settings.get().await {
        Ok(stored) => stored,
        Err(e) => {
            warn!(
                error = %e,
                settings = %config.settings_file.display(),
                "Could not load settings, using defaults"
            );
            Settings::with_defaults()
        }
    };
    apply_env_overrides(&mut effective);
    let resolver_path = effective
        .resolver_path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);
    debug!(?resolver_path, settings = %config.settings_file.display(), "Bootstrapping");

    let deps = GuiDeps::new(
        settings,
        Arc::new(YtDlpResolver::new(resolver_path)),
        Arc::new(HttpDownloader::new()),
        Arc::new(FfmpegRunner::new()),
    );

    Ok(CliContext {
        backend: GuiBackend::new(deps),
        settings_file: config.settings_file,
    })
}
