// src/config.rs

//! Configuration loading utilities.
//!
//! Convenience functions for loading the configuration and the tool catalog
//! from files.

use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::services::Catalog;

/// Load configuration from a TOML file, apply environment overrides and
/// validate it.
///
/// A missing file yields the defaults; a file that cannot be read or parsed
/// is an error.
pub fn load_config(path: &Path) -> Result<Config> {
    let mut config = if path.exists() {
        Config::load(path)?
    } else {
        log::warn!("Config not found at {}. Using defaults.", path.display());
        Config::default()
    };
    config.apply_env();
    config
        .validate()
        .map_err(|e| AppError::config(format!("Invalid configuration: {e}")))?;
    Ok(config)
}

/// Load and validate the tool catalog.
///
/// A missing catalog file yields an empty catalog; a malformed one is an
/// error.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        log::warn!(
            "Catalog not found at {}. Serving an empty catalog.",
            path.display()
        );
        return Ok(Catalog::default());
    }

    let catalog = Catalog::load(path)?;
    catalog
        .validate()
        .map_err(|e| AppError::config(format!("Invalid catalog {}: {e}", path.display())))?;
    Ok(catalog)
}

/// Load and validate both config and catalog.
pub fn load_all(config_path: &Path) -> Result<(Config, Catalog)> {
    let config = load_config(config_path)?;
    let catalog = load_catalog(Path::new(&config.catalog.path))?;
    Ok((config, catalog))
}
