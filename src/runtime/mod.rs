//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the system
//! operations the tool performs, enabling dependency injection and
//! testability.
//!
//! # Structure
//!
//! - `env` - User configuration directory lookup
//! - `fs` - File system operations (read, existence checks)
//! - `shell` - PowerShell invocation
//! - `user` - User interaction (confirmation prompts)

mod env;
mod fs;
mod shell;
mod user;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use shell::ShellOutput;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn exists(&self, path: &Path) -> bool;

    // Directories
    fn config_dir(&self) -> Option<PathBuf>;

    // Processes
    /// Run a PowerShell command line and capture its output.
    ///
    /// Returns `Ok` with the captured streams even when the command
    /// exits non-zero (`ShellOutput::success` reports that); `Err`
    /// only when PowerShell itself could not be spawned.
    fn powershell(&self, command: &str) -> Result<ShellOutput>;

    // User interaction
    /// Prompt user for confirmation. Returns true if user confirms (y/yes), false otherwise.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir_impl()
    }

    fn powershell(&self, command: &str) -> Result<ShellOutput> {
        self.powershell_impl(command)
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.confirm_impl(prompt)
    }
}
