//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests against a
//! mock org host.

use sfunpack::salesforce::{OrgConnection, SalesforceClient};
use wiremock::MockServer;

/// Create a client whose requests are routed to the mock server
pub fn mock_client(server: &MockServer, session_id: &str) -> SalesforceClient {
    let conn = OrgConnection::new("test.my.salesforce.com", session_id);
    SalesforceClient::with_base_url(conn, server.uri())
}

/// Wrap record JSON values in a query-result envelope
pub fn envelope(records: &[serde_json::Value]) -> serde_json::Value {
    serde_json::json!({
        "size": records.len(),
        "totalSize": records.len(),
        "done": true,
        "records": records,
    })
}

/// One `InstalledSubscriberPackage` record
#[allow(dead_code)]
pub fn package_record(
    id: &str,
    subscriber_package_id: &str,
    name: &str,
    container: &str,
) -> serde_json::Value {
    serde_json::json!({
        "attributes": {"type": "InstalledSubscriberPackage"},
        "Id": id,
        "SubscriberPackageId": subscriber_package_id,
        "SubscriberPackage": {"Name": name},
        "SubscriberPackageVersionId": "04t8d000000XYZAAA4",
        "SubscriberPackageVersion": {
            "IsManaged": container == "Managed",
            "Package2ContainerOptions": container,
        },
    })
}

/// One `Package2Member` record
#[allow(dead_code)]
pub fn member_record(subject_id: &str, subscriber_package_id: &str) -> serde_json::Value {
    serde_json::json!({
        "attributes": {"type": "Package2Member"},
        "Id": "1SG8d0000008cvWGAQ",
        "SubjectId": subject_id,
        "SubjectManageableState": "unmanaged",
        "SubscriberPackageId": subscriber_package_id,
    })
}
