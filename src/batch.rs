//! Directory batch conversion.
//!
//! Every supported image in a directory is converted with the same
//! configuration, one after another in sorted path order. A failure is
//! recorded against its file and the batch moves on.

use std::path::{Path, PathBuf};

use crate::convert::{convert_file, ConversionConfig};
use crate::error::{ConversionError, FileError};
use crate::source::is_supported;
use crate::viewport::Viewport;

/// Outcome for one file in a batch.
#[derive(Debug)]
pub struct BatchItem {
    pub path: PathBuf,
    pub result: Result<String, FileError>,
}

/// Per-file outcomes in conversion order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub items: Vec<BatchItem>,
}

impl BatchReport {
    /// Files that converted, with their art.
    pub fn successes(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.items.iter().filter_map(|item| match &item.result {
            Ok(art) => Some((item.path.as_path(), art.as_str())),
            Err(_) => None,
        })
    }

    /// Files that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = &FileError> {
        self.items.iter().filter_map(|item| item.result.as_ref().err())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// List the supported image files directly inside `dir`, sorted by path.
///
/// Subdirectories and files with other extensions are skipped.
///
/// # Errors
/// A [`FileError`] for `dir` if it cannot be read.
pub fn collect_images(dir: &Path) -> Result<Vec<PathBuf>, FileError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        let kind = if e.kind() == std::io::ErrorKind::NotFound {
            ConversionError::FileNotFound
        } else {
            ConversionError::IoError(e)
        };
        FileError::new(dir, kind)
    })?;

    let mut images: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                log::warn!("skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|path| {
            let keep = path.is_file() && is_supported(path);
            if !keep {
                log::debug!("skipping {}", path.display());
            }
            keep
        })
        .collect();

    images.sort();
    Ok(images)
}

/// Convert every supported image in `dir`.
///
/// # Errors
/// Only if the directory itself cannot be listed. Per-file failures are
/// reported inside the returned [`BatchReport`].
pub fn convert_dir(
    dir: &Path,
    config: &ConversionConfig,
    viewport: &impl Viewport,
) -> Result<BatchReport, FileError> {
    let paths = collect_images(dir)?;
    log::info!("converting {} image(s) in {}", paths.len(), dir.display());

    let mut report = BatchReport::default();
    for path in paths {
        let result = convert_file(&path, config, viewport);
        if let Err(e) = &result {
            log::warn!("{}", e);
        }
        report.items.push(BatchItem { path, result });
    }

    log::info!(
        "batch finished: {} converted, {} failed",
        report.successes().count(),
        report.failures().count()
    );
    Ok(report)
}
