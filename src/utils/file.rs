use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Whether anything exists at `path`
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Whether `path` exists and is a directory
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Lowercased extension of the file name, without the dot.
///
/// Dotfiles such as `.fonts` and names ending in a dot have no extension.
pub fn get_file_extension(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_lowercase())
}

/// Numeric id of the user owning `path`.
///
/// Only Unix exposes an owner id; other platforms yield `None`.
pub fn get_file_owner(path: impl AsRef<Path>) -> Result<Option<u32>> {
    let metadata = fs::metadata(path.as_ref())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        Ok(Some(metadata.uid()))
    }

    #[cfg(not(unix))]
    {
        let _ = metadata;
        Ok(None)
    }
}

/// Create a directory (and its parents) if it doesn't exist
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Directory {} does not exist. Creating it now.", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
