//! All resolved paths in one struct, for the `paths` command and tests.

use std::fmt;
use std::path::PathBuf;

use super::{PathError, data_root, env_file_path, resolve_download_dir, settings_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data.
    pub data_root: PathBuf,
    /// JSON settings file.
    pub settings_file: PathBuf,
    /// Optional `.env` overrides file.
    pub env_file: PathBuf,
    /// Where downloads land by default.
    pub download_dir: PathBuf,
}

impl ResolvedPaths {
    /// Resolve every path using the current environment and an optional
    /// configured download directory.
    pub fn resolve(download_dir: Option<&str>) -> Result<Self, PathError> {
        Ok(Self {
            data_root: data_root()?,
            settings_file: settings_path()?,
            env_file: env_file_path()?,
            download_dir: resolve_download_dir(download_dir)?,
        })
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data root:     {}", self.data_root.display())?;
        writeln!(f, "Settings file: {}", self.settings_file.display())?;
        writeln!(f, "Env file:      {}", self.env_file.display())?;
        write!(f, "Download dir:  {}", self.download_dir.display())
    }
}
