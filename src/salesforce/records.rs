//! Typed Tooling API records
//!
//! Fixed serde schemas for the record types returned by the queries this
//! tool issues. Field names map to the API's PascalCase JSON keys; a missing
//! selected field fails the whole decode rather than defaulting.

use serde::Deserialize;

/// Container option value marking a package version as unlocked
pub const UNLOCKED_CONTAINER: &str = "Unlocked";

/// One installed package, as returned by the `InstalledSubscriberPackage` query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstalledSubscriberPackage {
    /// Org-scoped id of the installation
    pub id: String,
    /// Id of the subscriber package itself
    pub subscriber_package_id: String,
    /// Nested package record (display name)
    pub subscriber_package: SubscriberPackage,
    /// Id of the installed package version
    pub subscriber_package_version_id: String,
    /// Nested version record (container options)
    pub subscriber_package_version: SubscriberPackageVersion,
}

impl InstalledSubscriberPackage {
    /// Whether the installed version's container marks it "Unlocked"
    pub fn is_unlocked(&self) -> bool {
        self.subscriber_package_version.package2_container_options == UNLOCKED_CONTAINER
    }

    /// Display name of the package
    pub fn name(&self) -> &str {
        &self.subscriber_package.name
    }
}

/// Nested subscriber package record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriberPackage {
    /// Display name
    pub name: String,
}

/// Nested subscriber package version record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriberPackageVersion {
    /// Whether the version belongs to a managed package
    pub is_managed: bool,
    /// Container kind, e.g. "Unlocked" or "Managed"
    pub package2_container_options: String,
}

/// One packaged metadata component, as returned by the `Package2Member` query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Package2Member {
    /// Record id of the membership row
    pub id: String,
    /// Id of the packaged metadata component
    pub subject_id: String,
    /// Manageable state of the component
    pub subject_manageable_state: String,
    /// Owning subscriber package id
    pub subscriber_package_id: String,
}
