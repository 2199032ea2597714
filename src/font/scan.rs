//! Directory scan that reports progress through a [`ProgressCallback`].

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::metadata::{has_font_extension, read_font_file};
use crate::error::{Error, Result};
use crate::models::{Config, ProgressCallback, ProgressData, ScanReport};

/// Files parsed per rayon worker between two cancellation checks
const FILES_PER_THREAD: usize = 4;

/// Recursively collect font candidates under `dir`.
///
/// Symlinked directories are not followed. Unreadable entries and
/// subdirectories are logged and skipped at every depth; only an
/// unreadable `dir` itself is an error.
pub fn find_font_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect_entries(fs::read_dir(dir)?, &mut found);
    Ok(found)
}

fn collect_entries<I>(entries: I, found: &mut Vec<PathBuf>)
where
    I: IntoIterator<Item = io::Result<DirEntry>>,
{
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if file_type.is_dir() {
            match fs::read_dir(&path) {
                Ok(children) => collect_entries(children, found),
                Err(e) => warn!("Skipping unreadable directory {}: {}", path.display(), e),
            }
        } else if path.is_file() && has_font_extension(&path) {
            found.push(path);
        }
    }
}

/// Scan `dir` for fonts, in natural order of their paths.
///
/// `callback` sees one [`ProgressData`] per candidate file, on the calling
/// thread. When it returns `false` the scan stops and the partial report
/// comes back with `cancelled` set.
pub fn scan_fonts<C>(dir: &Path, config: &Config, callback: &mut C) -> Result<ScanReport>
where
    C: ProgressCallback + ?Sized,
{
    if !dir.is_dir() {
        return Err(Error::InvalidPath(dir.to_path_buf()));
    }

    let candidates = config.sorter().sort_paths(find_font_files(dir)?);

    let total = u32::try_from(candidates.len()).unwrap_or(u32::MAX);
    info!("Scanning {} candidate font files in {}", total, dir.display());

    let mut report = ScanReport::default();
    let mut processed: u32 = 0;
    let batch_size = rayon::current_num_threads().max(1) * FILES_PER_THREAD;

    for batch in candidates.chunks(batch_size) {
        let parsed: Vec<_> = batch
            .par_iter()
            .map(|path| (path, read_font_file(path)))
            .collect();

        for (path, result) in parsed {
            match result {
                Ok(font) => report.fonts.push(font),
                Err(e) => {
                    debug!("Skipping {}: {}", path.display(), e);
                    report.skipped.push(path.clone());
                }
            }

            processed = processed.saturating_add(1);
            let message = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            if !callback.report(&ProgressData::new(message, processed, total)) {
                if processed < total {
                    info!("Scan cancelled after {} of {} files", processed, total);
                    report.cancelled = true;
                }
                return Ok(report);
            }
        }
    }

    info!(
        "Scan finished: {} fonts, {} skipped",
        report.fonts.len(),
        report.skipped.len()
    );
    Ok(report)
}
