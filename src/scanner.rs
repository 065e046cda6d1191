//! # Traversal Aggregator Module
//!
//! Questo modulo implementa lo scan ricorsivo con aggregazione per estensione.
//!
//! ## Responsabilità:
//! - Walk ricorsivo dell'albero con `walkdir` (due passate)
//! - Pass 1: conteggio dei file, usato solo come denominatore per la
//!   progress bar
//! - Pass 2: aggregazione di totali e breakdown per estensione
//! - Gli errori per-entry vengono inghiottiti (best-effort), mai propagati
//!
//! ## Design a due passate:
//! La prima passata stabilisce il bound per il feedback di progresso prima
//! che la seconda faccia il lavoro vero. Lo snapshot finale (count e size)
//! viene accumulato interamente nella seconda passata, quindi gli invarianti
//! `sum(count_by_extension) == total_files` e
//! `sum(size_by_extension) == total_size` valgono anche se l'albero cambia
//! tra le due passate.

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::OrganizeError;
use crate::progress::ProgressManager;

/// Sentinel extension key for files whose name has no dot suffix
pub const NO_EXTENSION: &str = "(no extension)";

/// Immutable analytics snapshot produced by one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analytics {
    pub total_files: u64,
    pub total_size: u64,
    pub count_by_extension: HashMap<String, u64>,
    pub size_by_extension: HashMap<String, u64>,
}

/// Normalized extension key for a file name: the lowercase suffix after the
/// final dot, with the sentinel for dot-less names. A leading dot counts,
/// so `.hidden` is keyed `hidden` rather than treated as extension-less.
fn extension_key(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) => file_name[idx + 1..].to_lowercase(),
        None => NO_EXTENSION.to_string(),
    }
}

/// Recursively scan `root` and aggregate per-extension counts and sizes.
///
/// Only an inaccessible root is fatal. Entries that cannot be read during
/// either walk contribute nothing and never abort the scan.
pub fn scan(root: &Path) -> Result<Analytics> {
    let metadata = std::fs::metadata(root).map_err(OrganizeError::Io)?;
    if !metadata.is_dir() {
        return Err(OrganizeError::InvalidPath(root.to_path_buf()).into());
    }

    // Pass 1: count files for the progress denominator
    let spinner = ProgressManager::spinner("Calculating total files...");
    let mut estimated_files: u64 = 0;
    for entry in WalkDir::new(root).into_iter() {
        match entry {
            Ok(entry) if !entry.file_type().is_dir() => estimated_files += 1,
            Ok(_) => {}
            Err(e) => debug!("Skipping entry during count: {}", e),
        }
    }
    spinner.finish_and_clear();

    // Pass 2: the real aggregation
    let progress = ProgressManager::new(estimated_files);
    let mut analytics = Analytics::default();

    for entry in WalkDir::new(root).into_iter() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping entry during scan: {}", e);
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        progress.update(&file_name);

        let size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                debug!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };

        let key = extension_key(&file_name);
        analytics.total_files += 1;
        analytics.total_size += size;
        *analytics.count_by_extension.entry(key.clone()).or_insert(0) += 1;
        *analytics.size_by_extension.entry(key).or_insert(0) += size;
    }

    progress.finish("Scan complete");
    Ok(analytics)
}
