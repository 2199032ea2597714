use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::Config;
use crate::utils::natural::CaseSensitivity;

#[derive(Debug, Parser)]
#[command(name = "fontsrt-utils")]
#[command(version)]
#[command(about = "Font manager utilities: natural sorting, user directories and font scans")]
#[command(long_about = "Font manager utilities: natural sorting, user directories \
    and font scans.\n\n\
    Examples:\n  \
    ls | fontsrt-utils sort              # Sort lines with numbers in value order\n  \
    fontsrt-utils dirs                   # Show (and create) the user directories\n  \
    fontsrt-utils filename \"Open Sans\"   # Print a safe filename for some text\n  \
    fontsrt-utils scan ~/Fonts           # List the fonts found under a directory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Compare letters case-sensitively when sorting
    #[arg(long, global = true)]
    pub case_sensitive: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sort lines in natural order
    Sort {
        /// File to read lines from (standard input when omitted)
        file: Option<PathBuf>,

        /// Print in descending order
        #[arg(short, long)]
        reverse: bool,
    },

    /// Print the user font, cache, config and fontconfig directories
    Dirs,

    /// Turn text into a safe filename
    Filename {
        /// Text to convert
        text: String,
    },

    /// Print the lowercased extension of a path
    Ext {
        /// Path to inspect
        path: PathBuf,
    },

    /// Scan a directory for font files
    Scan {
        /// Directory to scan
        dir: PathBuf,

        /// Print the report as TOML instead of a table
        #[arg(long)]
        toml: bool,
    },
}

impl Cli {
    /// Runtime configuration from the global flags
    pub fn config(&self) -> Config {
        let case = if self.case_sensitive {
            CaseSensitivity::Sensitive
        } else {
            CaseSensitivity::Insensitive
        };
        Config::new(self.debug, case)
    }
}
