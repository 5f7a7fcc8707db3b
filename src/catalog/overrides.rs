use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::runtime::Runtime;

use super::Catalog;

/// Curated dependency edges the platform does not report.
///
/// Maps a package identity to the identities that should be treated as
/// depending on it. Stored as a JSON object in the user configuration
/// directory:
///
/// ```json
/// {
///     "Vendor.Framework_1.0.0.0_x64__abc": [
///         "Vendor.App_2.0.0.0_x64__abc"
///     ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ManualOverrides {
    entries: BTreeMap<String, Vec<String>>,
}

impl ManualOverrides {
    pub fn new(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load overrides from `path`.
    ///
    /// A missing file is the empty override set. A file that exists but
    /// cannot be read or parsed is an error: silently dropping curated
    /// edges would flip removability verdicts the user pinned on
    /// purpose.
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        if !runtime.exists(path) {
            debug!("No overrides file at {:?}", path);
            return Ok(Self::default());
        }

        let content = runtime.read_to_string(path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Malformed overrides file {:?}", path))
    }

    /// Add each override edge whose source and dependent are both known
    /// catalog entries. Pairs naming an unknown identity are skipped:
    /// the override list may reference packages that are not installed
    /// on this machine.
    pub(crate) fn apply(&self, catalog: &mut Catalog) {
        for (source, dependents) in &self.entries {
            for dependent in dependents {
                if !catalog.contains_key(dependent) {
                    debug!("Override {} -> {}: dependent not installed", source, dependent);
                    continue;
                }
                match catalog.get_mut(source) {
                    Some(entry) => {
                        entry.required_for.insert(dependent.clone());
                    }
                    None => {
                        debug!("Override {} -> {}: source not installed", source, dependent);
                    }
                }
            }
        }
    }
}
