//! Per-user directories the font manager reads from and writes to.
//!
//! Platform roots come from the `directories` crate. Every getter creates
//! the directory when it is missing, so callers can write into the result
//! straight away.

use std::path::{Path, PathBuf};

use directories::{BaseDirs, UserDirs};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::config::PACKAGE_NAME;
use crate::utils::file::ensure_directory_exists;

/// Resolved platform roots plus the package directory name.
#[derive(Debug, Clone)]
pub struct Directories {
    data_dir: PathBuf,
    cache_dir: PathBuf,
    config_dir: PathBuf,
    font_dir: Option<PathBuf>,
    package_name: String,
}

impl Directories {
    /// Resolve the current user's platform directories.
    pub fn new(package_name: impl Into<String>) -> Result<Self> {
        let base = BaseDirs::new().ok_or(Error::NoHomeDirectory)?;
        let font_dir = UserDirs::new().and_then(|user| user.font_dir().map(Path::to_path_buf));

        Ok(Self {
            data_dir: base.data_dir().to_path_buf(),
            cache_dir: base.cache_dir().to_path_buf(),
            config_dir: base.config_dir().to_path_buf(),
            font_dir,
            package_name: package_name.into(),
        })
    }

    /// Lay every root out under `root`, as `data/`, `cache/` and `config/`.
    pub fn with_root(root: &Path, package_name: impl Into<String>) -> Self {
        Self {
            data_dir: root.join("data"),
            cache_dir: root.join("cache"),
            config_dir: root.join("config"),
            font_dir: None,
            package_name: package_name.into(),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Where the user installs personal fonts.
    ///
    /// Uses the platform font directory when it has one, `<data>/fonts`
    /// otherwise.
    pub fn user_font_directory(&self) -> Result<PathBuf> {
        let dir = self
            .font_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("fonts"));
        Self::prepare(dir)
    }

    pub fn package_cache_directory(&self) -> Result<PathBuf> {
        Self::prepare(self.cache_dir.join(&self.package_name))
    }

    pub fn package_config_directory(&self) -> Result<PathBuf> {
        Self::prepare(self.config_dir.join(&self.package_name))
    }

    /// User fontconfig directory (`<config>/fontconfig`)
    pub fn user_fontconfig_directory(&self) -> Result<PathBuf> {
        Self::prepare(self.config_dir.join("fontconfig"))
    }

    fn prepare(dir: PathBuf) -> Result<PathBuf> {
        if dir.exists() && !dir.is_dir() {
            return Err(Error::InvalidPath(dir));
        }
        ensure_directory_exists(&dir)?;
        debug!("Using directory {}", dir.display());
        Ok(dir)
    }
}

pub fn get_user_font_directory() -> Result<PathBuf> {
    Directories::new(PACKAGE_NAME)?.user_font_directory()
}

pub fn get_package_cache_directory() -> Result<PathBuf> {
    Directories::new(PACKAGE_NAME)?.package_cache_directory()
}

pub fn get_package_config_directory() -> Result<PathBuf> {
    Directories::new(PACKAGE_NAME)?.package_config_directory()
}

pub fn get_user_fontconfig_directory() -> Result<PathBuf> {
    Directories::new(PACKAGE_NAME)?.user_fontconfig_directory()
}
