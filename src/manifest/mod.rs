//! Manifest display-name lookup.
//!
//! Packages ship a manifest next to their installed files whose
//! `DisplayName` element is often friendlier than the platform-declared
//! name. The lookup is strictly advisory: any failure (missing file,
//! unreadable file, missing element) collapses to "no result" and the
//! caller falls back to the declared name.

use regex::Regex;
use std::path::Path;

use crate::runtime::Runtime;

/// Manifest file name expected under a package's install location.
pub const MANIFEST_FILE: &str = "AppxManifest.xml";

#[cfg_attr(test, mockall::automock)]
pub trait ManifestLookup {
    /// Best-effort display name for the package installed at
    /// `install_location`. `None` on any failure; the value is returned
    /// as found, unresolved resource placeholders included.
    fn display_name(&self, install_location: &Path) -> Option<String>;
}

/// Reads `AppxManifest.xml` and extracts the `DisplayName` element.
///
/// One advisory element is all we consume, so a targeted scan is used
/// rather than a full XML parse.
pub struct AppxManifestLookup<'a, R: Runtime> {
    runtime: &'a R,
    display_name: Regex,
}

impl<'a, R: Runtime> AppxManifestLookup<'a, R> {
    pub fn new(runtime: &'a R) -> Self {
        Self {
            runtime,
            display_name: Regex::new(r"<DisplayName>([^<]*)</DisplayName>")
                .expect("static pattern compiles"),
        }
    }
}

impl<R: Runtime> ManifestLookup for AppxManifestLookup<'_, R> {
    #[tracing::instrument(skip(self))]
    fn display_name(&self, install_location: &Path) -> Option<String> {
        let manifest_path = install_location.join(MANIFEST_FILE);
        let content = self.runtime.read_to_string(&manifest_path).ok()?;
        let captures = self.display_name.captures(&content)?;
        let name = captures.get(1)?.as_str().trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}
