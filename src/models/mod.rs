//! Data shared between the helpers, the scanner and the CLI

pub mod config;
pub mod font;
pub mod progress;

pub use config::Config;
pub use font::{FontFile, ScanReport};
pub use progress::{ProgressCallback, ProgressData};
