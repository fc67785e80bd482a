//! Data file path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the data file location.
pub const DATA_FILE_ENV_VAR: &str = "NUTRI_DATA_FILE";

/// Default data file path.
///
/// Resolution order:
/// 1. `NUTRI_DATA_FILE` environment variable
/// 2. `data/supplements.toml` relative to the workspace root
pub fn default_data_path() -> PathBuf {
    if let Ok(path) = std::env::var(DATA_FILE_ENV_VAR) {
        return PathBuf::from(path);
    }
    bundled_data_path()
}

/// The data file shipped with the workspace, ignoring the environment.
pub fn bundled_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/supplements.toml")
}
