//! Unlocked-package inventory
//!
//! Fetches all installed subscriber packages and keeps those whose version
//! container marks them "Unlocked".

use crate::error::ApiError;
use crate::salesforce::client::SalesforceClient;
use crate::salesforce::records::InstalledSubscriberPackage;

/// SOQL issued to inventory installed subscriber packages
const INSTALLED_PACKAGE_QUERY: &str = "SELECT Id, SubscriberPackageId, SubscriberPackage.Name, \
     SubscriberPackageVersionId, SubscriberPackageVersion.IsManaged, \
     SubscriberPackageVersion.Package2ContainerOptions \
     FROM InstalledSubscriberPackage";

/// List the unlocked packages installed in the org, in response order
///
/// Request and decode errors propagate unchanged. An empty result after
/// filtering is a valid outcome; the caller decides how to present it.
pub async fn list_unlocked_packages(
    client: &SalesforceClient,
) -> Result<Vec<InstalledSubscriberPackage>, ApiError> {
    let packages: Vec<InstalledSubscriberPackage> =
        client.query(INSTALLED_PACKAGE_QUERY).await?;
    Ok(keep_unlocked(packages))
}

/// Keep only unlocked packages, preserving relative order
fn keep_unlocked(packages: Vec<InstalledSubscriberPackage>) -> Vec<InstalledSubscriberPackage> {
    packages.into_iter().filter(|p| p.is_unlocked()).collect()
}
