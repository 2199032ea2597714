use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for FontSrt utility operations
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Invalid file or directory path
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// The platform reported no home directory to resolve user paths against
    #[error("Could not determine the user's home directory")]
    NoHomeDirectory,
    /// Settings schema ids must be plain file stems
    #[error("Invalid settings schema id: {0:?}")]
    InvalidSchema(String),
    /// Settings file could not be read or written
    #[error("Settings error: {0}")]
    Settings(String),
    /// Font parsing errors
    #[error("Font error: {0}")]
    Font(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Settings(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Settings(err.to_string())
    }
}

/// Result type alias for FontSrt utility operations
pub type Result<T> = std::result::Result<T, Error>;
