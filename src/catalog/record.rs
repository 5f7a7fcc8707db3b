use std::path::PathBuf;

/// One raw package record as reported by the record source.
///
/// The identity is the platform "package full name": globally unique
/// and stable for one install. Everything else is advisory input to
/// the catalog build.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PackageRecord {
    pub identity: String,
    /// Declared (platform) name, used when no manifest name resolves.
    pub name: String,
    /// Identities of the packages this record declares it depends on.
    pub dependencies: Vec<String>,
    pub is_framework: bool,
    pub is_non_removable: bool,
    /// Where the package is installed, if the platform reports it.
    /// Used only to locate the manifest for display-name lookup.
    pub install_location: Option<PathBuf>,
}
