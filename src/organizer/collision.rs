//! # Collision Resolution Module
//!
//! Centralizza la logica di scelta del path di destinazione quando il nome
//! desiderato è già occupato. Un solo rename deterministico, nessun retry.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::OrganizeError;

/// Decide the destination path actually used for a move.
///
/// The candidate is `target_dir/file_name`. If nothing exists there it is
/// returned unchanged. If something does, the fallback is
/// `{stem}_{mtime_unix}.{ext}` — a single deterministic rename. If the
/// fallback is occupied too (same name, same modification second) the move
/// fails with a collision error instead of looping.
///
/// The existence check is check-then-act: a concurrent writer can still race
/// between the check and the actual rename. Accepted for a single-user
/// desktop utility; no locking.
pub fn resolve_destination(
    target_dir: &Path,
    file_name: &str,
    normalized_ext: &str,
    mtime_unix: u64,
) -> Result<PathBuf> {
    let candidate = target_dir.join(file_name);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let stem = match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    };
    let renamed = if normalized_ext.is_empty() {
        format!("{}_{}", stem, mtime_unix)
    } else {
        format!("{}_{}.{}", stem, mtime_unix, normalized_ext)
    };

    let fallback = target_dir.join(&renamed);
    debug!(
        "Destination {} occupied, falling back to {}",
        candidate.display(),
        fallback.display()
    );

    if fallback.exists() {
        return Err(OrganizeError::Collision(fallback).into());
    }
    Ok(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_free_destination_returned_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let dest =
            resolve_destination(temp_dir.path(), "a.jpg", "jpg", 1700000000).unwrap();
        assert_eq!(dest, temp_dir.path().join("a.jpg"));
    }

    #[test]
    fn test_occupied_destination_gets_timestamp_suffix() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.jpg"), b"old").unwrap();

        let dest =
            resolve_destination(temp_dir.path(), "a.jpg", "jpg", 1700000000).unwrap();
        assert_eq!(dest, temp_dir.path().join("a_1700000000.jpg"));
    }

    #[test]
    fn test_occupied_fallback_is_a_collision_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.jpg"), b"old").unwrap();
        std::fs::write(temp_dir.path().join("a_1700000000.jpg"), b"older").unwrap();

        let err = resolve_destination(temp_dir.path(), "a.jpg", "jpg", 1700000000);
        assert!(err.is_err());
    }

    #[test]
    fn test_no_extension_fallback_has_no_trailing_dot() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("readme"), b"x").unwrap();

        let dest = resolve_destination(temp_dir.path(), "readme", "", 1700000000).unwrap();
        assert_eq!(dest, temp_dir.path().join("readme_1700000000"));
    }

    #[test]
    fn test_uppercase_original_extension_replaced_by_normalized() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.JPG"), b"old").unwrap();

        let dest =
            resolve_destination(temp_dir.path(), "a.JPG", "jpg", 1700000000).unwrap();
        assert_eq!(dest, temp_dir.path().join("a_1700000000.jpg"));
    }
}
