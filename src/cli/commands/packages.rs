//! CLI implementation for `sfunpack packages`
//!
//! Read-only inventory of the unlocked packages installed in the org.

use anyhow::{Context, Result};

use crate::cli::commands::OrgArgs;
use crate::cli::output;
use crate::core::catalog;

/// Execute the packages command
pub async fn execute(org: OrgArgs) -> Result<()> {
    let client = org.connect()?;

    let spinner = output::create_spinner("Fetching installed packages...");
    let packages = catalog::list_unlocked_packages(&client).await;
    spinner.finish_and_clear();

    let packages = packages.context("Could not retrieve unlocked packages")?;
    if packages.is_empty() {
        println!("No unlocked packages found");
        return Ok(());
    }

    println!();
    println!("Unlocked packages:");
    for (i, pkg) in packages.iter().enumerate() {
        println!("({}) {}", i + 1, pkg.name());
    }

    Ok(())
}
