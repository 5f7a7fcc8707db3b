//! PowerShell invocation.

use anyhow::{Context, Result};
use std::process::Command;

use super::RealRuntime;

/// Captured output of a PowerShell invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

// Windows ships `powershell.exe`; elsewhere PowerShell Core is `pwsh`.
#[cfg(windows)]
const POWERSHELL: &str = "powershell.exe";
#[cfg(not(windows))]
const POWERSHELL: &str = "pwsh";

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn powershell_impl(&self, command: &str) -> Result<ShellOutput> {
        let output = Command::new(POWERSHELL)
            .args(["-NoProfile", "-NonInteractive", "-Command", command])
            .output()
            .with_context(|| format!("Failed to run {}", POWERSHELL))?;

        Ok(ShellOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
