//! Package catalog construction.
//!
//! The catalog is the single consistent view of everything installed on
//! the machine: one entry per package identity, carrying the resolved
//! display name, the platform flags, and the set of packages that
//! depend on it. It merges platform-reported records, manifest-provided
//! display names, and curated override edges, and is
//! rebuilt from scratch on every refresh.

mod build;
mod entry;
mod overrides;
mod record;

pub use build::build_catalog;
pub use entry::{Catalog, CatalogEntry, RESOURCE_PLACEHOLDER_PREFIX};
pub use overrides::ManualOverrides;
pub use record::PackageRecord;
