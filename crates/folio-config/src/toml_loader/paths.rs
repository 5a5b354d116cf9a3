//! Where the config file lives, and writing the first one.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use folio_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

const APP_DIR: &str = "folio";
const CONFIG_FILE: &str = "config.toml";

/// `$FOLIO_CONFIG` when set and non-empty, else
/// `<platform config dir>/folio/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir())
}

pub(crate) fn resolve_config_path(
    explicit: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    match (explicit, config_dir) {
        (Some(path), _) if !path.is_empty() => Ok(PathBuf::from(path)),
        (_, Some(dir)) => Ok(dir.join(APP_DIR).join(CONFIG_FILE)),
        (_, None) => Err(ConfigError::ParseError(format!(
            "no platform config directory; set {CONFIG_PATH_ENV}"
        ))),
    }
}

/// Write the commented default config to `path`, creating parent
/// directories. An existing file is never overwritten.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |action: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {action} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err("create directory for", e))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| io_err("create", e))?;
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_err("write", e))?;

    info!("created default config at {}", path.display());
    Ok(())
}
