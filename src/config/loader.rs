// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (ranges, colours, etc.). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the raw config the binaries start from.
///
/// - An explicit path must exist and parse.
/// - Without one, `Dagkit.toml` in the working directory is used if present.
/// - Otherwise the built-in defaults apply.
///
/// The result is still unvalidated so CLI overrides can be layered on top
/// before the `TryFrom` conversion.
pub fn load_raw_or_default(explicit: Option<&Path>) -> Result<RawConfigFile> {
    if let Some(path) = explicit {
        debug!(path = ?path, "loading config file");
        return load_from_path(path);
    }

    let fallback = default_config_path();
    if fallback.is_file() {
        debug!(path = ?fallback, "loading config file from working directory");
        return load_from_path(&fallback);
    }

    debug!("no config file; using built-in defaults");
    Ok(RawConfigFile::default())
}

/// Default config location: `Dagkit.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Dagkit.toml")
}
