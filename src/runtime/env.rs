//! Environment and system information operations.

use std::path::PathBuf;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn config_dir_impl(&self) -> Option<PathBuf> {
        dirs::config_dir()
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};

    #[test]
    fn test_real_runtime_config_dir() {
        let runtime = RealRuntime;

        // Some CI environments have no config dir; only assert that the
        // call does not panic and that any returned path is absolute.
        if let Some(dir) = runtime.config_dir() {
            assert!(dir.is_absolute());
        }
    }
}
