use crate::manifest::ManifestLookup;

use super::{Catalog, ManualOverrides, PackageRecord, RESOURCE_PLACEHOLDER_PREFIX};

/// Build a fresh catalog from the raw records.
///
/// Two explicit phases: dependency edges are seeded first, so that by
/// the time record attributes are written every dependency identity
/// already has an entry, and a record's own entry (possibly created as
/// someone else's dependency) is updated rather than replaced. Manual
/// override edges are applied last, once every installable identity is
/// known.
pub fn build_catalog(
    records: Vec<PackageRecord>,
    overrides: &ManualOverrides,
    lookup: &impl ManifestLookup,
) -> Catalog {
    let mut catalog = Catalog::new();

    // Phase 1: seed dependency edges.
    for record in &records {
        for dependency in &record.dependencies {
            catalog
                .entry(dependency.clone())
                .or_default()
                .required_for
                .insert(record.identity.clone());
        }
    }

    // Phase 2: write record attributes, leaving required_for untouched.
    for record in records {
        let display_name = resolve_display_name(&record, lookup);
        let entry = catalog.entry(record.identity).or_default();
        entry.display_name = display_name;
        entry.is_framework = record.is_framework;
        entry.is_non_removable = record.is_non_removable;
    }

    overrides.apply(&mut catalog);

    catalog
}

/// Prefer the manifest display name over the declared one, unless the
/// manifest yields nothing or an unresolved resource placeholder.
/// Manifest access is advisory: any lookup failure falls back to the
/// declared name.
fn resolve_display_name(record: &PackageRecord, lookup: &impl ManifestLookup) -> String {
    if let Some(location) = &record.install_location
        && let Some(name) = lookup.display_name(location)
        && !name.starts_with(RESOURCE_PLACEHOLDER_PREFIX)
    {
        return name;
    }
    record.name.clone()
}
