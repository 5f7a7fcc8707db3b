use anyhow::Result;
use log::debug;

use crate::evaluate::{RowFilter, evaluate};
use crate::runtime::Runtime;

use super::config::{Config, refresh_catalog};

/// Show detailed information about one package
#[tracing::instrument(skip(runtime, config))]
pub fn show<R: Runtime>(runtime: R, identity: &str, config: Config) -> Result<()> {
    debug!("Showing info for {}", identity);

    let catalog = refresh_catalog(&runtime, &config)?;
    let rows = evaluate(&catalog, &RowFilter::default());

    let Some(row) = rows.iter().find(|r| r.identity == identity) else {
        anyhow::bail!("Package {} is not installed.", identity);
    };

    println!("Package: {}", row.identity);
    println!("Name: {}", row.display_name);
    println!("Framework: {}", yes_no(row.is_framework));
    println!("Non-removable: {}", yes_no(row.is_non_removable));
    println!("Removable: {}", yes_no(row.can_remove));

    if !row.required_for.is_empty() {
        println!();
        println!("Required for:");
        for dependent in &row.required_for {
            println!("  {}", dependent);
        }
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
