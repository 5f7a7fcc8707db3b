use anyhow::Result;
use log::debug;

use crate::evaluate::{PackageRow, RowFilter, evaluate};
use crate::removal::{PowerShellRemover, remove_packages};
use crate::runtime::Runtime;

use super::config::{Config, refresh_catalog};

/// Remove the selected packages, or with `all` every removable one
#[tracing::instrument(skip(runtime, config))]
pub fn remove<R: Runtime>(
    runtime: R,
    identities: Vec<String>,
    all: bool,
    filter: RowFilter,
    yes: bool,
    dry_run: bool,
    config: Config,
) -> Result<()> {
    let catalog = refresh_catalog(&runtime, &config)?;

    let selected = if all {
        // Mirror of "select all": every removable row still visible
        // under the active hide filters.
        let removable: Vec<PackageRow> = evaluate(&catalog, &filter)
            .into_iter()
            .filter(|row| row.can_remove)
            .collect();
        if removable.is_empty() {
            println!("No removable packages.");
            return Ok(());
        }
        removable
    } else {
        // Explicit identities are validated against the unfiltered
        // catalog: hide flags are a display concern, dependents are not.
        let rows = evaluate(&catalog, &RowFilter::default());
        let mut selected = Vec::with_capacity(identities.len());
        for identity in &identities {
            let Some(row) = rows.iter().find(|r| &r.identity == identity) else {
                anyhow::bail!("Package {} is not installed.", identity);
            };
            if row.is_non_removable {
                anyhow::bail!("Package {} is marked non-removable by the platform.", identity);
            }
            if !row.can_remove {
                anyhow::bail!(
                    "Package {} is still required by:\n{}",
                    identity,
                    row.required_for_list()
                );
            }
            selected.push(row.clone());
        }
        selected
    };

    debug!("Selected {} package(s) for removal", selected.len());
    show_removal_plan(&selected);

    if dry_run {
        println!("Dry run, nothing removed.");
        return Ok(());
    }

    if !yes && !runtime.confirm("Proceed with removal?")? {
        println!("Removal cancelled.");
        return Ok(());
    }

    let remover = PowerShellRemover::new(&runtime);
    let targets: Vec<String> = selected.into_iter().map(|row| row.identity).collect();
    let report = remove_packages(&remover, &targets);

    println!(
        "{}/{} packages removed, {} failed",
        report.removed,
        report.attempted,
        report.failed()
    );

    Ok(())
}

fn show_removal_plan(rows: &[PackageRow]) {
    println!();
    println!("=== Removal Plan ===");
    println!();
    println!("Packages to remove:");
    for row in rows {
        println!("  [DEL] {} ({})", row.identity, row.display_name);
    }
    println!();
}
