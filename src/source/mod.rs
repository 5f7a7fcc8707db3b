//! Record sources: where the package inventory comes from.
//!
//! The live source enumerates installed packages through PowerShell;
//! the dump source reads the same JSON shape from a file. Either way
//! the rest of the tool only ever sees `PackageRecord`s.

mod dump;
mod powershell;
mod records;

pub use dump::DumpInventory;
pub use powershell::PowerShellInventory;

use anyhow::Result;

use crate::catalog::PackageRecord;

#[cfg_attr(test, mockall::automock)]
pub trait PackageSource {
    /// Enumerate the currently installed packages.
    ///
    /// Failing to enumerate the source as a whole is an error for the
    /// caller to handle; there is no partial result.
    fn records(&self) -> Result<Vec<PackageRecord>>;
}
