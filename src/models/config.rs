use crate::utils::natural::{CaseSensitivity, NaturalSort};

/// Directory name used under the platform cache and config roots
pub const PACKAGE_NAME: &str = "fontsrt";

/// Runtime configuration shared by the CLI and the scanner
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// How the natural-sort comparator treats letter case
    pub case: CaseSensitivity,
    /// Directory name under the cache and config roots
    pub package_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug_mode: false,
            case: CaseSensitivity::Insensitive,
            package_name: PACKAGE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with default settings
    pub fn new(debug_mode: bool, case: CaseSensitivity) -> Self {
        Self {
            debug_mode,
            case,
            ..Self::default()
        }
    }

    /// Comparator matching this configuration
    pub fn sorter(&self) -> NaturalSort {
        NaturalSort::new(self.case)
    }
}
