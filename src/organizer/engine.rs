//! # Relocation Engine
//!
//! Orchestratore principale della riorganizzazione: enumera i figli diretti
//! di una directory, classifica ogni file tramite il `RuleIndex` e lo sposta
//! nella sottocartella della sua categoria.
//!
//! ## Responsabilità:
//! - Listing non ricorsivo della directory sorgente (mai descend nei subdir)
//! - Skip di directory, file nascosti e file senza regola
//! - Creazione on-demand delle directory di categoria
//! - Spostamento con semantica rename, collision-safe
//! - Accumulo di un `MoveOutcome` per ogni entry, senza abortire il batch
//!
//! ## Failure policy:
//! - Il listing della sorgente che fallisce è l'unico errore fatale
//! - Ogni fallimento per-file (metadata, mkdir, rename) diventa un outcome
//!   `Failed` e il batch prosegue; nessun rollback dei move già completati

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info, warn};

use crate::config::CategoryRules;
use crate::organizer::collision::resolve_destination;
use crate::organizer::rule_index::{normalize_extension, RuleIndex};

/// Per-file result of one organize pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub file_name: String,
    pub status: MoveStatus,
}

/// What happened to a single directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveStatus {
    Moved {
        category: String,
        destination: PathBuf,
    },
    SkippedIsDirectory,
    SkippedHidden,
    SkippedNoRule,
    Failed(String),
}

/// Classification-and-relocation engine over a single directory's children
pub struct Organizer {
    index: RuleIndex,
}

impl Organizer {
    /// Validate the rules and build the extension index
    pub fn new(rules: &CategoryRules) -> Result<Self> {
        rules.validate()?;
        let index = RuleIndex::build(rules);
        debug!("Rule index built: {} extensions routed", index.len());
        Ok(Self { index })
    }

    /// Organize the immediate children of `source_dir`.
    ///
    /// Returns one outcome per entry. The only fatal error is failing to
    /// read the listing itself; everything after that is captured per file.
    pub fn organize(&self, source_dir: &Path) -> Result<Vec<MoveOutcome>> {
        let entries = std::fs::read_dir(source_dir)
            .with_context(|| format!("failed to read directory {}", source_dir.display()))?;

        let mut outcomes = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    outcomes.push(MoveOutcome {
                        file_name: "<unreadable entry>".to_string(),
                        status: MoveStatus::Failed(e.to_string()),
                    });
                    continue;
                }
            };

            let file_name = entry.file_name().to_string_lossy().into_owned();
            let status = self.relocate_entry(source_dir, &entry, &file_name);
            outcomes.push(MoveOutcome { file_name, status });
        }

        Ok(outcomes)
    }

    /// Classify and move one entry, capturing every failure as a status
    fn relocate_entry(
        &self,
        source_dir: &Path,
        entry: &std::fs::DirEntry,
        file_name: &str,
    ) -> MoveStatus {
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => return MoveStatus::Failed(format!("cannot read file type: {}", e)),
        };

        // The engine never descends
        if file_type.is_dir() {
            debug!("Skipping directory {}", file_name);
            return MoveStatus::SkippedIsDirectory;
        }

        // Hidden files are skipped before any rule lookup
        if file_name.starts_with('.') {
            debug!("Skipping hidden file {}", file_name);
            return MoveStatus::SkippedHidden;
        }

        let ext = Path::new(file_name)
            .extension()
            .map(|e| normalize_extension(&e.to_string_lossy()))
            .unwrap_or_default();

        let category = match self.index.category_for(&ext) {
            Some(category) => category.to_string(),
            None => {
                debug!("No rule for {} (ext \"{}\")", file_name, ext);
                return MoveStatus::SkippedNoRule;
            }
        };

        let mtime_unix = match Self::modified_unix(entry) {
            Ok(mtime) => mtime,
            Err(e) => return MoveStatus::Failed(format!("cannot read metadata: {}", e)),
        };

        let target_dir = source_dir.join(&category);
        if let Err(e) = std::fs::create_dir_all(&target_dir) {
            return MoveStatus::Failed(format!(
                "cannot create {}: {}",
                target_dir.display(),
                e
            ));
        }

        let destination = match resolve_destination(&target_dir, file_name, &ext, mtime_unix)
        {
            Ok(destination) => destination,
            Err(e) => return MoveStatus::Failed(e.to_string()),
        };

        info!("Moving {} to {}", file_name, category);
        // entry.path() keeps the original bytes; the lossy name is only for
        // reporting and the destination.
        match std::fs::rename(entry.path(), &destination) {
            Ok(()) => MoveStatus::Moved {
                category,
                destination,
            },
            // Rename across filesystem boundaries can fail; reported per
            // file, never fatal to the batch.
            Err(e) => MoveStatus::Failed(format!("move failed: {}", e)),
        }
    }

    fn modified_unix(entry: &std::fs::DirEntry) -> Result<u64> {
        let modified = entry.metadata()?.modified()?;
        Ok(modified
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs())
    }
}
