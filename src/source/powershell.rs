//! Live package enumeration through PowerShell.

use anyhow::Result;
use log::debug;

use crate::catalog::PackageRecord;
use crate::runtime::Runtime;

use super::PackageSource;
use super::records::parse_records;

/// Pipeline producing the package inventory as JSON. `-Depth 4` keeps
/// the nested dependency objects intact; the default depth flattens
/// them to strings.
const ENUMERATE_COMMAND: &str = "Get-AppxPackage | Select-Object PackageFullName, Name, IsFramework, NonRemovable, InstallLocation, Dependencies | ConvertTo-Json -Depth 4";

pub struct PowerShellInventory<'a, R: Runtime> {
    runtime: &'a R,
}

impl<'a, R: Runtime> PowerShellInventory<'a, R> {
    pub fn new(runtime: &'a R) -> Self {
        Self { runtime }
    }
}

impl<R: Runtime> PackageSource for PowerShellInventory<'_, R> {
    #[tracing::instrument(skip(self))]
    fn records(&self) -> Result<Vec<PackageRecord>> {
        let output = self.runtime.powershell(ENUMERATE_COMMAND)?;
        if !output.success {
            anyhow::bail!("Package enumeration failed: {}", output.stderr.trim());
        }

        let records = parse_records(&output.stdout)?;
        debug!("Enumerated {} package(s)", records.len());
        Ok(records)
    }
}
