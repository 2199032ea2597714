use std::path::PathBuf;

use serde::Serialize;

/// A font face found by a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontFile {
    /// Path of the font file
    pub path: PathBuf,
    /// Font family name
    pub family: String,
    /// Font subfamily (style variant)
    pub style: String,
    /// Font weight value
    pub weight: u16,
    /// Whether the font is italic
    pub italic: bool,
}

/// Result of a font directory scan
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// The progress callback asked to stop before every file was visited
    pub cancelled: bool,
    /// Candidates that could not be parsed as fonts
    pub skipped: Vec<PathBuf>,
    /// Parsed fonts, in natural order of their paths
    pub fonts: Vec<FontFile>,
}

impl ScanReport {
    /// Number of candidate files that were looked at
    pub fn visited(&self) -> usize {
        self.fonts.len() + self.skipped.len()
    }
}
