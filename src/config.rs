//! # Configuration Management Module
//!
//! Questo modulo gestisce il caricamento e la validazione delle regole.
//!
//! ## Responsabilità:
//! - Definisce la struct `CategoryRules` (categoria → lista di estensioni)
//! - Caricamento da file JSON object-of-arrays con `serde_json`
//! - Discovery del file di regole (path esplicito, cwd, directory dell'eseguibile)
//! - Validazione robusta delle regole prima dell'uso
//!
//! ## Formato del file:
//! ```json
//! {
//!     "Images": ["jpg", "png", ".gif"],
//!     "Docs": ["pdf", "docx"]
//! }
//! ```
//!
//! ## Validazione:
//! - I nomi delle categorie devono essere non vuoti
//! - La stessa estensione normalizzata non può comparire in due categorie:
//!   il vincitore dipenderebbe dall'ordine di iterazione della mappa, quindi
//!   il duplicato viene rifiutato al load con un errore che nomina entrambe
//!
//! ## Esempio:
//! ```rust,no_run
//! use smart_organizer::CategoryRules;
//!
//! # fn main() -> anyhow::Result<()> {
//! let rules = CategoryRules::discover(None)?;
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::OrganizeError;
use crate::organizer::rule_index::normalize_extension;

/// Default rules file name looked up in the current directory and next to
/// the executable when no explicit path is given.
pub const DEFAULT_CONFIG_NAME: &str = "config.json";

/// Category rules: folder name → extension patterns handled by that folder.
///
/// Patterns may carry a leading dot and any casing; they are normalized
/// before lookup. `BTreeMap` keeps iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRules {
    pub categories: BTreeMap<String, Vec<String>>,
}

impl CategoryRules {
    /// Validate the rules before building an index from them.
    pub fn validate(&self) -> Result<()> {
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();

        for (category, extensions) in &self.categories {
            if category.trim().is_empty() {
                return Err(OrganizeError::InvalidRules(
                    "category names must be non-empty".to_string(),
                )
                .into());
            }

            for pattern in extensions {
                let normalized = normalize_extension(pattern);
                // Empty patterns are inert: a real file extension is never
                // empty, so they can never match and are not worth rejecting.
                if normalized.is_empty() {
                    continue;
                }
                if let Some(previous) = seen.insert(normalized.clone(), category.as_str()) {
                    if previous != category.as_str() {
                        return Err(OrganizeError::InvalidRules(format!(
                            "extension \"{}\" is claimed by both \"{}\" and \"{}\"",
                            normalized, previous, category
                        ))
                        .into());
                    }
                }
            }
        }

        Ok(())
    }

    /// Load rules from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            OrganizeError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let rules: CategoryRules = serde_json::from_str(&content).map_err(|e| {
            OrganizeError::Config(format!("cannot parse {}: {}", path.display(), e))
        })?;
        rules.validate()?;
        Ok(rules)
    }

    /// Locate and load the rules file.
    ///
    /// An explicit path always wins. Otherwise `config.json` is tried in the
    /// current directory, then next to the executable. A missing file is an
    /// error: the tool needs rules to work.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let mut search_dirs = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            search_dirs.push(cwd);
        }
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                search_dirs.push(dir.to_path_buf());
            }
        }
        Self::discover_in(explicit, &search_dirs)
    }

    /// Discovery over an explicit list of directories, in precedence order
    fn discover_in(explicit: Option<&Path>, search_dirs: &[PathBuf]) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for dir in search_dirs {
            let candidate = dir.join(DEFAULT_CONFIG_NAME);
            if candidate.exists() {
                return Self::from_file(&candidate);
            }
        }

        Err(OrganizeError::Config("config file not found".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rules_from_json(json: &str) -> CategoryRules {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_object_of_arrays() {
        let rules = rules_from_json(r#"{"Images": ["jpg", ".PNG"], "Docs": ["pdf"]}"#);
        assert_eq!(rules.categories.len(), 2);
        assert_eq!(rules.categories["Images"], vec!["jpg", ".PNG"]);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_empty_category_name_rejected() {
        let rules = rules_from_json(r#"{"": ["jpg"]}"#);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_duplicate_extension_rejected() {
        let rules = rules_from_json(r#"{"Images": ["jpg"], "Photos": [".JPG"]}"#);
        let err = rules.validate().unwrap_err().to_string();
        assert!(err.contains("jpg"));
        assert!(err.contains("Images"));
        assert!(err.contains("Photos"));
    }

    #[test]
    fn test_duplicate_within_same_category_is_fine() {
        let rules = rules_from_json(r#"{"Images": ["jpg", ".jpg", "JPG"]}"#);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_empty_patterns_are_inert() {
        let rules = rules_from_json(r#"{"Images": [""], "Docs": ["."]}"#);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_from_file_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"Music": ["mp3", "flac"]}"#).unwrap();

        let rules = CategoryRules::from_file(&path).unwrap();
        assert_eq!(rules.categories["Music"], vec!["mp3", "flac"]);
    }

    #[test]
    fn test_from_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.json");
        assert!(CategoryRules::from_file(&path).is_err());
    }

    #[test]
    fn test_discover_explicit_wins() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rules.json");
        std::fs::write(&path, r#"{"Docs": ["pdf"]}"#).unwrap();

        let rules = CategoryRules::discover(Some(&path)).unwrap();
        assert!(rules.categories.contains_key("Docs"));
    }

    #[test]
    fn test_discover_explicit_beats_search_dirs() {
        let explicit_dir = TempDir::new().unwrap();
        let search_dir = TempDir::new().unwrap();
        let explicit = explicit_dir.path().join("rules.json");
        std::fs::write(&explicit, r#"{"Explicit": ["pdf"]}"#).unwrap();
        std::fs::write(
            search_dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{"Searched": ["pdf"]}"#,
        )
        .unwrap();

        let rules = CategoryRules::discover_in(
            Some(&explicit),
            &[search_dir.path().to_path_buf()],
        )
        .unwrap();
        assert!(rules.categories.contains_key("Explicit"));
    }

    #[test]
    fn test_discover_searches_directories_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        std::fs::write(
            first.path().join(DEFAULT_CONFIG_NAME),
            r#"{"First": ["jpg"]}"#,
        )
        .unwrap();
        std::fs::write(
            second.path().join(DEFAULT_CONFIG_NAME),
            r#"{"Second": ["jpg"]}"#,
        )
        .unwrap();

        let dirs = [first.path().to_path_buf(), second.path().to_path_buf()];
        let rules = CategoryRules::discover_in(None, &dirs).unwrap();
        assert!(rules.categories.contains_key("First"));

        // First directory empty: falls through to the next one
        std::fs::remove_file(first.path().join(DEFAULT_CONFIG_NAME)).unwrap();
        let rules = CategoryRules::discover_in(None, &dirs).unwrap();
        assert!(rules.categories.contains_key("Second"));
    }

    #[test]
    fn test_discover_nothing_found_is_an_error() {
        let empty = TempDir::new().unwrap();
        assert!(CategoryRules::discover_in(None, &[empty.path().to_path_buf()]).is_err());
    }
}
