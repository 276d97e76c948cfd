use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variables holding the connection settings
pub const HOST: &str = "POSTGRESQL_ADDON_HOST";
pub const PORT: &str = "POSTGRESQL_ADDON_PORT";
pub const DATABASE: &str = "POSTGRESQL_ADDON_DB";
pub const USER: &str = "POSTGRESQL_ADDON_USER";
pub const PASSWORD: &str = "POSTGRESQL_ADDON_PASSWORD";

/// Load a key-value file into the process environment
///
/// With no explicit path the usual `.env` lookup applies (current directory
/// and its parents). Variables already present in the environment are not
/// overridden, and a file that cannot be read is skipped: the check then
/// runs with whatever the environment already has.
///
/// Returns the path of the file that was loaded, if any.
pub fn load(path: Option<&Path>) -> Option<PathBuf> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => {
            debug!(path = %path.display(), "loaded environment file");
            Some(path)
        }
        Err(err) => {
            debug!(error = %err, "no environment file loaded");
            None
        }
    }
}
