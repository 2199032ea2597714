//! Common utilities for the FontSrt font manager.
//!
//! The centerpiece is [`natural_sort`], an ordering for file and family
//! names in which embedded numbers compare by value. Around it sit small
//! helpers for files, names, per-user directories and settings, plus a
//! font directory scan that reports [`ProgressData`] to a callback.

pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod settings;
pub mod utils;

pub use error::{Error, Result};
pub use models::{Config, FontFile, ProgressCallback, ProgressData, ScanReport};
pub use settings::{get_settings, Settings};
pub use utils::natural::{
    natural_sort, natural_sort_opt, sort_natural, CaseSensitivity, Natural, NaturalSort,
};
