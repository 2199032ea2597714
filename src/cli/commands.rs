use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::args::{Cli, Command};
use crate::font::scan_fonts;
use crate::models::{Config, ProgressData, ScanReport};
use crate::utils::file::get_file_extension;
use crate::utils::naming::to_filename;
use crate::utils::paths::Directories;

/// Execute the parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    debug!("Running {:?} with {:?}", cli.command, config);

    match cli.command {
        Command::Sort { file, reverse } => sort_file_or_stdin(file.as_deref(), reverse, &config),
        Command::Dirs => print_directories(&config),
        Command::Filename { text } => {
            println!("{}", to_filename(&text));
            Ok(())
        }
        Command::Ext { path } => {
            match get_file_extension(&path) {
                Some(ext) => println!("{ext}"),
                None => println!(),
            }
            Ok(())
        }
        Command::Scan { dir, toml } => scan_directory(&dir, toml, &config),
    }
}

fn sort_file_or_stdin(file: Option<&Path>, reverse: bool, config: &Config) -> Result<()> {
    let out = io::stdout().lock();
    match file {
        Some(path) => {
            let input = fs::File::open(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            sort_lines(BufReader::new(input), out, reverse, config)
        }
        None => sort_lines(io::stdin().lock(), out, reverse, config),
    }
}

/// Write the lines of `input` to `output` in natural order
fn sort_lines(
    input: impl BufRead,
    output: impl Write,
    reverse: bool,
    config: &Config,
) -> Result<()> {
    let mut lines = input
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .context("Failed to read input lines")?;

    config.sorter().sort(&mut lines);
    if reverse {
        lines.reverse();
    }

    let mut out = BufWriter::new(output);
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

fn print_directories(config: &Config) -> Result<()> {
    let dirs = Directories::new(config.package_name.as_str())?;

    println!("fonts:      {}", dirs.user_font_directory()?.display());
    println!("cache:      {}", dirs.package_cache_directory()?.display());
    println!("config:     {}", dirs.package_config_directory()?.display());
    println!("fontconfig: {}", dirs.user_fontconfig_directory()?.display());
    Ok(())
}

fn scan_directory(dir: &Path, as_toml: bool, config: &Config) -> Result<()> {
    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("█▓░"),
    );

    let mut on_progress = |data: &ProgressData| {
        bar.set_length(u64::from(data.total));
        bar.set_position(u64::from(data.processed));
        bar.set_message(data.message.clone());
        true
    };

    let report = scan_fonts(dir, config, &mut on_progress)
        .with_context(|| format!("Failed to scan {}", dir.display()))?;
    bar.finish_and_clear();

    if as_toml {
        print!("{}", toml::to_string_pretty(&report)?);
    } else {
        print_report(&report, dir);
    }
    Ok(())
}

fn print_report(report: &ScanReport, root: &Path) {
    for font in &report.fonts {
        let shown = font.path.strip_prefix(root).unwrap_or(&font.path);
        println!(
            "{:<32} {:<20} {:>4}{}  {}",
            font.family,
            font.style,
            font.weight,
            if font.italic { " italic" } else { "" },
            shown.display()
        );
    }

    println!(
        "\n{} fonts, {} skipped{}",
        report.fonts.len(),
        report.skipped.len(),
        if report.cancelled { " (cancelled)" } else { "" }
    );
}
