//! Config file location

use std::path::{Path, PathBuf};

use localenv_domain::CONFIG_BASENAME;

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV_VAR: &str = "LOCALENV_CONFIG";

/// Directory name under the platform config directory.
const APP_DIR: &str = "localenv";

/// Returns `<config dir>/localenv/local_env_var.json`.
///
/// Falls back to the current directory when the platform has no config
/// directory.
#[must_use]
pub fn default_config_path() -> PathBuf {
    config_path_in(dirs::config_dir().as_deref().unwrap_or_else(|| Path::new(".")))
}

/// Returns the config path to use: `explicit` if given, else the default.
#[must_use]
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(default_config_path, Path::to_path_buf)
}

fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(CONFIG_BASENAME)
}
