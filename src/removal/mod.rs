//! Removal execution and tallying.
//!
//! The executor removes exactly one package per call. The loop above it
//! isolates failures: one package failing to remove never stops the
//! rest of the selection, it is only counted.

use anyhow::Result;
use log::warn;

use crate::runtime::Runtime;

#[cfg_attr(test, mockall::automock)]
pub trait RemovalExecutor {
    /// Remove one installed package by identity.
    fn remove(&self, identity: &str) -> Result<()>;
}

/// Removes packages with `Remove-AppxPackage`.
pub struct PowerShellRemover<'a, R: Runtime> {
    runtime: &'a R,
}

impl<'a, R: Runtime> PowerShellRemover<'a, R> {
    pub fn new(runtime: &'a R) -> Self {
        Self { runtime }
    }
}

impl<R: Runtime> RemovalExecutor for PowerShellRemover<'_, R> {
    #[tracing::instrument(skip(self))]
    fn remove(&self, identity: &str) -> Result<()> {
        // Single-quoted in PowerShell; embedded quotes are doubled.
        let command = format!(
            "Remove-AppxPackage -Package '{}'",
            identity.replace('\'', "''")
        );
        let output = self.runtime.powershell(&command)?;
        if !output.success {
            anyhow::bail!("Remove-AppxPackage failed: {}", output.stderr.trim());
        }
        Ok(())
    }
}

/// Aggregate outcome of one removal pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RemovalReport {
    pub attempted: usize,
    pub removed: usize,
}

impl RemovalReport {
    pub fn failed(&self) -> usize {
        self.attempted - self.removed
    }
}

/// Remove each selected identity, exactly once each, tallying the
/// outcomes. Failures are logged and counted, never propagated.
#[tracing::instrument(skip(executor, identities))]
pub fn remove_packages<E: RemovalExecutor + ?Sized>(
    executor: &E,
    identities: &[String],
) -> RemovalReport {
    let mut report = RemovalReport::default();

    for identity in identities {
        report.attempted += 1;
        match executor.remove(identity) {
            Ok(()) => report.removed += 1,
            Err(e) => warn!("Failed to remove {}: {:#}", identity, e),
        }
    }

    report
}
