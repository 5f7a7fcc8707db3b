use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::catalog::{Catalog, ManualOverrides, PackageRecord, build_catalog};
use crate::manifest::AppxManifestLookup;
use crate::runtime::Runtime;
use crate::source::{DumpInventory, PackageSource, PowerShellInventory};

/// Shared command configuration resolved from the global CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Read the inventory from this JSON dump instead of querying the
    /// platform.
    pub input: Option<PathBuf>,
    /// Overrides file location; defaults to
    /// `<config_dir>/appxsweep/overrides.json`.
    pub overrides_path: Option<PathBuf>,
}

/// One atomic refresh: enumerate records, load overrides, build the
/// catalog. Callers only ever see a complete catalog.
#[tracing::instrument(skip(runtime, config))]
pub(crate) fn refresh_catalog<R: Runtime>(runtime: &R, config: &Config) -> Result<Catalog> {
    let records = load_records(runtime, config)?;
    debug!("Loaded {} package record(s)", records.len());

    let overrides_path = match &config.overrides_path {
        Some(path) => path.clone(),
        None => default_overrides_path(runtime)?,
    };
    let overrides = ManualOverrides::load(runtime, &overrides_path)?;
    if !overrides.is_empty() {
        debug!("Applying manual overrides from {:?}", overrides_path);
    }

    let lookup = AppxManifestLookup::new(runtime);
    Ok(build_catalog(records, &overrides, &lookup))
}

fn load_records<R: Runtime>(runtime: &R, config: &Config) -> Result<Vec<PackageRecord>> {
    let source: Box<dyn PackageSource + '_> = match &config.input {
        Some(path) => {
            debug!("Reading inventory dump {:?}", path);
            Box::new(DumpInventory::new(runtime, path.clone()))
        }
        None => Box::new(PowerShellInventory::new(runtime)),
    };
    source.records()
}

fn default_overrides_path<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let dir = runtime
        .config_dir()
        .context("Could not determine the user configuration directory")?;
    Ok(dir.join("appxsweep").join("overrides.json"))
}
