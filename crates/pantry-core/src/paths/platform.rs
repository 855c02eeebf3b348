//! Data root resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the data root.
pub const DATA_DIR_ENV: &str = "PANTRY_DATA_DIR";

/// Directory name used under the platform data directory.
const APP_DIR_NAME: &str = "pantry";

/// Get the root directory for application data (database).
///
/// Resolution order:
/// 1. `PANTRY_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/pantry`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = resolve_data_root(env::var(DATA_DIR_ENV).ok().as_deref(), dirs::data_local_dir())?;

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

/// Pure resolution step behind [`data_root`], without touching the filesystem.
pub fn resolve_data_root(
    override_dir: Option<&str>,
    system_data_dir: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    if let Some(raw) = override_dir {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PathError::EmptyPath);
        }
        return Ok(PathBuf::from(trimmed));
    }

    system_data_dir
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(PathError::NoDataDir)
}
