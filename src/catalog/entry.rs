use std::collections::{BTreeMap, BTreeSet};

/// Prefix of manifest display names that are unresolved localized
/// resource references rather than human-readable text.
pub const RESOURCE_PLACEHOLDER_PREFIX: &str = "ms-resource";

/// The complete rebuilt-per-refresh mapping from package identity to
/// its merged attributes and dependents. A `BTreeMap` keeps iteration
/// in identity order, so repeated evaluations of an unchanged catalog
/// produce identical output sequences.
pub type Catalog = BTreeMap<String, CatalogEntry>;

/// Merged attributes and dependents for one package identity.
///
/// An entry may exist for an identity that never appeared as a
/// top-level record: a dependency can be known only by reference, in
/// which case the name stays empty and the flags stay false.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogEntry {
    /// Resolved display name; empty until the identity is seen as a
    /// top-level record.
    pub display_name: String,
    /// Identities of the installed packages that depend on this one,
    /// whether via a declared dependency or a manual override. A set:
    /// a dependent named by both sources counts once.
    pub required_for: BTreeSet<String>,
    pub is_framework: bool,
    pub is_non_removable: bool,
}

impl CatalogEntry {
    /// A package is removable iff nothing installed depends on it.
    pub fn is_removable(&self) -> bool {
        self.required_for.is_empty()
    }
}
