//! Platform path detection and resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable that relocates all application data.
pub const DATA_DIR_ENV: &str = "TABCONV_DATA_DIR";

/// Get the root directory for application data (settings, `.env`).
///
/// Resolution order:
/// 1. `TABCONV_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/tabconv`), created if missing
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let root = dirs::data_local_dir()
        .ok_or(PathError::NoDataDir)?
        .join("tabconv");
    ensure_directory(&root)?;
    Ok(root)
}

/// Create `path` (and parents) if needed, and check it is a directory.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{ENV_LOCK, EnvVarGuard};
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_data_root_env_override() {
        let _lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, dir.path().to_str().unwrap());

        assert_eq!(data_root().unwrap(), dir.path());
    }

    #[test]
    fn test_normalize_relative_path_is_absolute() {
        let path = normalize_user_path("downloads").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("downloads"));
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(normalize_user_path("  "), Err(PathError::EmptyPath)));
    }

    #[test]
    fn test_ensure_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());

        let file = dir.path().join("file");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            ensure_directory(&file),
            Err(PathError::NotADirectory(_))
        ));
    }
}
