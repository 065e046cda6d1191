//! # Reporting Module
//!
//! Presentation helpers for scan analytics and organize outcomes:
//! human-readable sizes, the per-extension table and the end-of-run summary.

use crate::organizer::{MoveOutcome, MoveStatus};
use crate::scanner::Analytics;

/// One table row of the per-extension breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionRow {
    pub extension: String,
    pub count: u64,
    pub count_pct: f64,
    pub size: u64,
    pub size_pct: f64,
}

/// Get human-readable file size
pub fn format_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// Build the per-extension rows, sorted by size descending.
///
/// Percentages are forced to zero when the respective total is zero, so an
/// empty tree never produces NaN. Ties on size break alphabetically to keep
/// the output deterministic.
pub fn extension_rows(analytics: &Analytics) -> Vec<ExtensionRow> {
    let mut rows: Vec<ExtensionRow> = analytics
        .count_by_extension
        .iter()
        .map(|(extension, &count)| {
            let size = analytics
                .size_by_extension
                .get(extension)
                .copied()
                .unwrap_or(0);
            let count_pct = if analytics.total_files == 0 {
                0.0
            } else {
                count as f64 / analytics.total_files as f64 * 100.0
            };
            let size_pct = if analytics.total_size == 0 {
                0.0
            } else {
                size as f64 / analytics.total_size as f64 * 100.0
            };
            ExtensionRow {
                extension: extension.clone(),
                count,
                count_pct,
                size,
                size_pct,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.size.cmp(&a.size).then(a.extension.cmp(&b.extension)));
    rows
}

/// Render the analytics as a plain aligned-column table
pub fn render_table(analytics: &Analytics) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<16} {:>8} {:>8} {:>12} {:>8}\n",
        "Extension", "Count", "Count %", "Size", "Size %"
    ));
    out.push_str(&"-".repeat(56));
    out.push('\n');

    for row in extension_rows(analytics) {
        out.push_str(&format!(
            "{:<16} {:>8} {:>7.1}% {:>12} {:>7.1}%\n",
            row.extension,
            row.count,
            row.count_pct,
            format_size(row.size),
            row.size_pct
        ));
    }

    out
}

/// One-line tally of an organize run
pub fn summarize_outcomes(outcomes: &[MoveOutcome]) -> String {
    let mut moved = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for outcome in outcomes {
        match outcome.status {
            MoveStatus::Moved { .. } => moved += 1,
            MoveStatus::Failed(_) => failed += 1,
            _ => skipped += 1,
        }
    }

    format!(
        "Processed: {} entries | Moved: {} | Skipped: {} | Failed: {}",
        outcomes.len(),
        moved,
        skipped,
        failed
    )
}
