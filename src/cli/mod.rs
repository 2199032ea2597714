//! Command-line interface

mod args;
mod commands;

pub use args::{Cli, Command};
pub use commands::run;
