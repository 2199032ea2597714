//! Key/value settings persisted as one TOML file per schema.
//!
//! A schema id such as `org.fontsrt.Library` maps to
//! `<config dir>/org.fontsrt.Library.toml`. Values are untyped on disk and
//! converted through serde on access.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::utils::file::ensure_directory_exists;
use crate::utils::paths::get_package_config_directory;

/// Settings bound to one schema
#[derive(Debug, Clone)]
pub struct Settings {
    schema_id: String,
    path: PathBuf,
    values: toml::Table,
}

impl Settings {
    /// Load the settings for `schema_id` from `dir`.
    ///
    /// A missing file yields empty settings; nothing is written until
    /// [`Settings::save`].
    pub fn open(schema_id: &str, dir: &Path) -> Result<Self> {
        validate_schema_id(schema_id)?;
        let path = dir.join(format!("{schema_id}.toml"));

        let values = if path.is_file() {
            debug!("Loading settings from {}", path.display());
            toml::from_str::<toml::Table>(&fs::read_to_string(&path)?)?
        } else {
            debug!("No settings file at {}, starting empty", path.display());
            toml::Table::new()
        };

        Ok(Self {
            schema_id: schema_id.to_string(),
            path,
            values,
        })
    }

    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value stored under `key`, if present and convertible to `T`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?.clone();
        match value.try_into() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Setting {}.{} has an unexpected type: {}", self.schema_id, key, e);
                None
            }
        }
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        let value = toml::Value::try_from(value)?;
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    /// Drop `key`, returning whether it was set
    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Write the settings back to their file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_directory_exists(parent)?;
        }
        let contents = toml::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents)?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Settings for `schema_id` from the package config directory.
///
/// Returns `None`, after logging why, when the schema cannot be loaded.
pub fn get_settings(schema_id: &str) -> Option<Settings> {
    let loaded = get_package_config_directory().and_then(|dir| Settings::open(schema_id, &dir));
    match loaded {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!("Settings schema {} is unavailable: {}", schema_id, e);
            None
        }
    }
}

fn validate_schema_id(schema_id: &str) -> Result<()> {
    let invalid = schema_id.is_empty()
        || schema_id.starts_with('.')
        || schema_id.contains(['/', '\\'])
        || schema_id.chars().any(char::is_control);

    if invalid {
        return Err(Error::InvalidSchema(schema_id.to_string()));
    }
    Ok(())
}
