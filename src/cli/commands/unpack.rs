//! CLI implementation for `sfunpack unpack`
//!
//! The full interactive workflow: list unlocked packages, select one,
//! collect the confirmation token, then remove the packaged components one
//! at a time with per-step progress.

use anyhow::{ensure, Context, Result};

use crate::cli::commands::OrgArgs;
use crate::cli::{output, prompt};
use crate::core::{catalog, remove};
use crate::salesforce::records::InstalledSubscriberPackage;
use crate::salesforce::SalesforceClient;

/// Execute the unpack command
pub async fn execute(org: OrgArgs, package: Option<usize>, token: Option<String>) -> Result<()> {
    let client = org.connect()?;

    let Some(selected) = select_package(&client, package).await? else {
        println!("No unlocked packages found");
        return Ok(());
    };

    let confirmation_token = match token {
        Some(token) => token,
        None => prompt::string_input("Confirmation Token")?,
    };

    let spinner = output::create_spinner("Fetching package components...");
    let components = remove::list_components(&client, &selected.subscriber_package_id).await;
    spinner.finish_and_clear();
    let components = components.context("Could not retrieve package components")?;

    println!();
    println!("# Package components: {}", components.len());

    remove::remove_all(
        &client,
        &selected.id,
        &components,
        &confirmation_token,
        Some(Box::new(|remaining| println!("{remaining} remaining"))),
    )
    .await
    .context("Could not remove package component")?;

    println!("{} Removed {}", output::status::SUCCESS, selected.name());
    Ok(())
}

/// Fetch unlocked packages and pick one, either by the `--package` number or
/// interactively. Returns `None` when the org has no unlocked packages.
async fn select_package(
    client: &SalesforceClient,
    preselected: Option<usize>,
) -> Result<Option<InstalledSubscriberPackage>> {
    let spinner = output::create_spinner("Fetching installed packages...");
    let packages = catalog::list_unlocked_packages(client).await;
    spinner.finish_and_clear();

    let packages = packages.context("Could not retrieve unlocked packages")?;
    if packages.is_empty() {
        return Ok(None);
    }

    let number = match preselected {
        Some(n) => {
            ensure!(
                (1..=packages.len()).contains(&n),
                "Package number {n} is out of range (1-{})",
                packages.len()
            );
            n
        }
        None => {
            println!();
            println!("Unlocked packages:");
            for (i, pkg) in packages.iter().enumerate() {
                println!("({}) {}", i + 1, pkg.name());
            }
            prompt::number_input("Select a package number", 1, packages.len())?
        }
    };

    Ok(packages.into_iter().nth(number - 1))
}
