//! # Rule Index Module
//!
//! Costruisce la mappa inversa estensione → categoria per lookup veloci.
//! Centralizza anche la normalizzazione delle estensioni, condivisa con
//! lo scanner.

use std::collections::HashMap;

use crate::config::CategoryRules;

/// Normalize an extension pattern or file suffix: lowercase, one leading
/// dot stripped. `".JPG"` and `"jpg"` normalize to the same key.
pub fn normalize_extension(ext: &str) -> String {
    ext.strip_prefix('.').unwrap_or(ext).to_lowercase()
}

/// Immutable extension → category lookup, built once per organize call.
#[derive(Debug, Clone)]
pub struct RuleIndex {
    by_extension: HashMap<String, String>,
}

impl RuleIndex {
    /// Build the index from category rules.
    ///
    /// Later insertions overwrite earlier ones for the same normalized
    /// extension; with `BTreeMap` iteration that means the alphabetically
    /// later category wins. Validated rules never contain such duplicates,
    /// so the case only arises for indices built from unvalidated rules.
    pub fn build(rules: &CategoryRules) -> Self {
        let mut by_extension = HashMap::new();

        for (category, extensions) in &rules.categories {
            for pattern in extensions {
                let normalized = normalize_extension(pattern);
                if normalized.is_empty() {
                    continue; // inert pattern, can never match a real suffix
                }
                by_extension.insert(normalized, category.clone());
            }
        }

        Self { by_extension }
    }

    /// Look up the category for an already-normalized extension
    pub fn category_for(&self, normalized_ext: &str) -> Option<&str> {
        self.by_extension.get(normalized_ext).map(String::as_str)
    }

    /// Number of distinct extensions the index routes
    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}
