//! Package inventory read from a JSON dump file.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::catalog::PackageRecord;
use crate::runtime::Runtime;

use super::PackageSource;
use super::records::parse_records;

/// Reads the same JSON shape the live enumeration produces from a
/// file, for offline inspection of an inventory captured elsewhere:
///
/// ```text
/// Get-AppxPackage | Select-Object PackageFullName, Name, IsFramework,
///     NonRemovable, InstallLocation, Dependencies |
///     ConvertTo-Json -Depth 4 > packages.json
/// ```
pub struct DumpInventory<'a, R: Runtime> {
    runtime: &'a R,
    path: PathBuf,
}

impl<'a, R: Runtime> DumpInventory<'a, R> {
    pub fn new(runtime: &'a R, path: PathBuf) -> Self {
        Self { runtime, path }
    }
}

impl<R: Runtime> PackageSource for DumpInventory<'_, R> {
    #[tracing::instrument(skip(self))]
    fn records(&self) -> Result<Vec<PackageRecord>> {
        let content = self
            .runtime
            .read_to_string(&self.path)
            .with_context(|| format!("Failed to read package dump {:?}", self.path))?;
        parse_records(&content)
    }
}
