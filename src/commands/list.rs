use anyhow::Result;
use log::debug;

use crate::evaluate::{PackageRow, RowFilter, evaluate, filter_by_name};
use crate::runtime::Runtime;

use super::config::{Config, refresh_catalog};

/// List installed packages with their removability verdicts
#[tracing::instrument(skip(runtime, config))]
pub fn list<R: Runtime>(
    runtime: R,
    filter: RowFilter,
    name_filter: Option<String>,
    config: Config,
) -> Result<()> {
    let catalog = refresh_catalog(&runtime, &config)?;
    debug!("Catalog holds {} entries", catalog.len());

    let mut rows = evaluate(&catalog, &filter);
    if let Some(query) = name_filter.as_deref() {
        rows = filter_by_name(&rows, query);
    }

    if rows.is_empty() {
        println!("No packages to show.");
        return Ok(());
    }

    print_rows(&rows);

    let removable = rows.iter().filter(|r| r.can_remove).count();
    println!();
    println!("{} package(s), {} removable", rows.len(), removable);

    Ok(())
}

fn print_rows(rows: &[PackageRow]) {
    let width = rows.iter().map(|r| r.identity.len()).max().unwrap_or(0);

    for row in rows {
        let verdict = if row.can_remove { "removable" } else { "required" };
        let mut tags = String::new();
        if row.is_framework {
            tags.push_str(" [framework]");
        }
        if row.is_non_removable {
            tags.push_str(" [non-removable]");
        }
        if !row.required_for.is_empty() {
            tags.push_str(&format!(" (required by {})", row.required_for.len()));
        }

        println!(
            "{:<width$}  {:<9}  {}{}",
            row.identity, verdict, row.display_name, tags
        );
    }
}
