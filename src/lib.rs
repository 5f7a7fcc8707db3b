pub mod catalog;
pub mod commands;
pub mod evaluate;
pub mod manifest;
pub mod removal;
pub mod runtime;
pub mod source;

/// Test utilities shared across module tests.
#[cfg(test)]
pub mod test_utils {
    use crate::catalog::PackageRecord;

    /// Build a record with the given identity and declared
    /// dependencies; the declared name equals the identity.
    pub fn record(identity: &str, dependencies: &[&str]) -> PackageRecord {
        named_record(identity, identity, dependencies)
    }

    /// Build a record with an explicit declared name.
    pub fn named_record(identity: &str, name: &str, dependencies: &[&str]) -> PackageRecord {
        PackageRecord {
            identity: identity.to_string(),
            name: name.to_string(),
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        }
    }
}
