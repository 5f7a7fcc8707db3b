//! Wire format of the package enumeration JSON.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::catalog::PackageRecord;

/// One package object as serialized by `ConvertTo-Json`. Fields the
/// platform leaves unset arrive as JSON null.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawPackage {
    package_full_name: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    is_framework: Option<bool>,
    #[serde(default)]
    non_removable: Option<bool>,
    #[serde(default)]
    install_location: Option<PathBuf>,
    #[serde(default)]
    dependencies: Option<Vec<RawDependency>>,
}

/// Dependencies are full package objects on the wire; only the identity
/// is consumed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawDependency {
    package_full_name: String,
}

// ConvertTo-Json collapses a single-element result to a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<RawPackage>),
    One(Box<RawPackage>),
}

impl From<RawPackage> for PackageRecord {
    fn from(raw: RawPackage) -> Self {
        PackageRecord {
            identity: raw.package_full_name,
            name: raw.name.unwrap_or_default(),
            dependencies: raw
                .dependencies
                .unwrap_or_default()
                .into_iter()
                .map(|d| d.package_full_name)
                .collect(),
            is_framework: raw.is_framework.unwrap_or_default(),
            is_non_removable: raw.non_removable.unwrap_or_default(),
            install_location: raw.install_location,
        }
    }
}

/// Parse the enumeration JSON into records. Empty output means no
/// packages, which PowerShell reports as an empty string rather than
/// an empty array.
pub(crate) fn parse_records(json: &str) -> Result<Vec<PackageRecord>> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Ok(vec![]);
    }

    let raw: OneOrMany =
        serde_json::from_str(trimmed).context("Malformed package enumeration JSON")?;

    let raws = match raw {
        OneOrMany::Many(raws) => raws,
        OneOrMany::One(raw) => vec![*raw],
    };

    Ok(raws.into_iter().map(PackageRecord::from).collect())
}
