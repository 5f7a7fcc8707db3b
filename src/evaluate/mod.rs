//! Removability evaluation over a built catalog.
//!
//! Turns catalog entries into view-ready rows: applies the hide
//! filters, resolves the display fallback for never-named entries, and
//! derives the removability verdict. The catalog is read-only here;
//! evaluating the same catalog with the same filter twice yields the
//! same sequence.

use crate::catalog::Catalog;

/// Active hide filters. Both default to off: show everything.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowFilter {
    pub hide_frameworks: bool,
    pub hide_non_removable: bool,
}

/// One package, ready for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRow {
    pub identity: String,
    pub display_name: String,
    /// Identities of the packages that require this one, in identity
    /// order.
    pub required_for: Vec<String>,
    pub is_framework: bool,
    pub is_non_removable: bool,
    /// True iff no installed package depends on this one. Dependents,
    /// not dependencies, govern removability.
    pub can_remove: bool,
}

impl PackageRow {
    /// The dependents rendered one identity per line, for detail views.
    pub fn required_for_list(&self) -> String {
        self.required_for.join("\n")
    }
}

/// Evaluate every catalog entry against the filter.
///
/// Filtered-out entries are absent from the output, not merely marked.
pub fn evaluate(catalog: &Catalog, filter: &RowFilter) -> Vec<PackageRow> {
    let mut rows = Vec::with_capacity(catalog.len());

    for (identity, entry) in catalog {
        if (filter.hide_frameworks && entry.is_framework)
            || (filter.hide_non_removable && entry.is_non_removable)
        {
            continue;
        }

        rows.push(PackageRow {
            identity: identity.clone(),
            display_name: if entry.display_name.is_empty() {
                // Known only as someone's dependency; never named.
                "(unknown)".to_string()
            } else {
                entry.display_name.clone()
            },
            required_for: entry.required_for.iter().cloned().collect(),
            is_framework: entry.is_framework,
            is_non_removable: entry.is_non_removable,
            can_remove: entry.is_removable(),
        });
    }

    rows
}

/// Keep only rows whose display name contains `query`,
/// case-insensitively. Purely presentational.
pub fn filter_by_name(rows: &[PackageRow], query: &str) -> Vec<PackageRow> {
    let query = query.to_lowercase();
    rows.iter()
        .filter(|row| row.display_name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
