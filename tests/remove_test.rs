//! Integration tests for the sequential removal loop
//!
//! Drives `remove_all` against a mock org host and pins the removal
//! endpoint's wire shape: 15-char path segment, parameter set, Cookie auth.
//! Also verifies the fail-stop ordering guarantee by counting requests.

mod common;

use common::{envelope, member_record, mock_client};
use sfunpack::core::remove::{self, RemovalError};
use sfunpack::error::ApiError;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PACKAGE_ID: &str = "0A38d0000004CzbCAE";
const PACKAGE_ID_15: &str = "0A38d0000004Czb";

const COMPONENT_A: &str = "0558d000000AAAAA01";
const COMPONENT_B: &str = "0558d000000BBBBB02";
const COMPONENT_C: &str = "0558d000000CCCCC03";

const TOKEN: &str = "TOK123";

fn components() -> Vec<String> {
    vec![
        COMPONENT_A.to_string(),
        COMPONENT_B.to_string(),
        COMPONENT_C.to_string(),
    ]
}

/// Mount a removal-endpoint mock for one component
async fn mount_removal(server: &MockServer, component_id: &str, status: u16, expect: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/{PACKAGE_ID_15}")))
        .and(query_param("isdtp", "p1"))
        .and(query_param("p15", &component_id[..15]))
        .and(query_param("remove_package_member", "1"))
        .and(query_param("_CONFIRMATIONTOKEN", TOKEN))
        .and(header("Cookie", "sid=SESSION_TOKEN"))
        .respond_with(ResponseTemplate::new(status))
        .expect(expect)
        .mount(server)
        .await;
}

#[tokio::test]
async fn removes_all_components_in_order_reporting_remaining() {
    let server = MockServer::start().await;
    for component in [COMPONENT_A, COMPONENT_B, COMPONENT_C] {
        mount_removal(&server, component, 200, 1).await;
    }

    let client = mock_client(&server, "SESSION_TOKEN");
    let mut reports = Vec::new();

    remove::remove_all(
        &client,
        PACKAGE_ID,
        &components(),
        TOKEN,
        Some(Box::new(|remaining| reports.push(remaining))),
    )
    .await
    .unwrap();

    // K - i - 1 after each step, 0 after the last
    assert_eq!(reports, [2, 1, 0]);

    // Calls were issued in input order
    let requests = server.received_requests().await.unwrap();
    let p15_values: Vec<String> = requests
        .iter()
        .map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "p15")
                .map(|(_, v)| v.to_string())
                .unwrap()
        })
        .collect();
    assert_eq!(
        p15_values,
        [&COMPONENT_A[..15], &COMPONENT_B[..15], &COMPONENT_C[..15]]
    );
}

#[tokio::test]
async fn stops_at_first_failure_naming_the_component() {
    let server = MockServer::start().await;
    mount_removal(&server, COMPONENT_A, 200, 1).await;
    mount_removal(&server, COMPONENT_B, 500, 1).await;
    mount_removal(&server, COMPONENT_C, 200, 0).await;

    let client = mock_client(&server, "SESSION_TOKEN");
    let mut reports = Vec::new();

    let err = remove::remove_all(
        &client,
        PACKAGE_ID,
        &components(),
        TOKEN,
        Some(Box::new(|remaining| reports.push(remaining))),
    )
    .await
    .unwrap_err();

    match err {
        RemovalError::Failed {
            component_id,
            source,
        } => {
            assert_eq!(component_id, COMPONENT_B);
            assert!(matches!(source, ApiError::RequestFailed { .. }));
        }
        e => panic!("Expected Failed, got: {e:?}"),
    }

    // Progress was reported for the success only, and no call followed the failure
    assert_eq!(reports, [2]);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn removal_call_carries_no_bearer_header() {
    let server = MockServer::start().await;
    mount_removal(&server, COMPONENT_A, 200, 1).await;

    let client = mock_client(&server, "SESSION_TOKEN");
    remove::remove_all(
        &client,
        PACKAGE_ID,
        &[COMPONENT_A.to_string()],
        TOKEN,
        None,
    )
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("Authorization").is_none());
}

#[tokio::test]
async fn short_component_id_issues_no_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = mock_client(&server, "SESSION_TOKEN");
    let ids = vec![COMPONENT_A.to_string(), "too-short".to_string()];

    let err = remove::remove_all(&client, PACKAGE_ID, &ids, TOKEN, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RemovalError::IdTooShort(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn lists_component_ids_in_response_order() {
    let server = MockServer::start().await;
    let soql = "SELECT Id, SubjectId, SubjectManageableState, SubscriberPackageId \
         FROM Package2Member WHERE SubscriberPackageId = '0338d000000XXXXAAY'";
    let body = envelope(&[
        member_record(COMPONENT_B, "0338d000000XXXXAAY"),
        member_record(COMPONENT_A, "0338d000000XXXXAAY"),
    ]);

    Mock::given(method("GET"))
        .and(path("/services/data/v54.0/tooling/query/"))
        .and(query_param("q", soql))
        .and(header("Authorization", "Bearer SESSION_TOKEN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, "SESSION_TOKEN");
    let ids = remove::list_components(&client, "0338d000000XXXXAAY")
        .await
        .unwrap();
    assert_eq!(ids, [COMPONENT_B, COMPONENT_A]);
}
