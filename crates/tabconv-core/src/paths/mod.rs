//! Path utilities for tabconv data directories and user-configurable locations.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O; adapters handle prompts separately

mod config;
mod error;
mod platform;
mod resolver;

#[cfg(test)]
mod test_utils;

pub use config::{SETTINGS_FILE_NAME, env_file_path, resolve_download_dir, settings_path};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, ensure_directory, normalize_user_path};
pub use resolver::ResolvedPaths;
