//! Settings and `.env` file locations.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::{data_root, normalize_user_path};

/// File name of the persisted settings under the data root.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Location of the JSON settings file.
pub fn settings_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(SETTINGS_FILE_NAME))
}

/// Location of the `.env` file that stores user overrides.
pub fn env_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(".env"))
}

/// Directory downloads land in when no destination is given.
///
/// Uses the configured directory if set, else the platform downloads
/// directory, else the current directory.
pub fn resolve_download_dir(configured: Option<&str>) -> Result<PathBuf, PathError> {
    if let Some(raw) = configured {
        return normalize_user_path(raw);
    }

    if let Some(dir) = dirs::download_dir() {
        return Ok(dir);
    }

    std::env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))
}
