//! Authenticated HTTP client for one org
//!
//! Issues GET requests against the org host under one of two credential
//! schemes and classifies responses. No retries, no timeout override; a
//! caller embedding this in a long-running service should impose one at the
//! HTTP-client layer.

use reqwest::header::{AUTHORIZATION, COOKIE};
use serde::de::DeserializeOwned;

use crate::config::defaults;
use crate::error::ApiError;
use crate::salesforce::connection::OrgConnection;
use crate::salesforce::ids::LegacyId;
use crate::salesforce::query;

/// Credential attachment scheme for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// `Authorization: Bearer <session id>`, used for Tooling API query calls
    Bearer,
    /// `Cookie: sid=<session id>`, used for the UI-proxied removal endpoint
    Cookie,
}

/// HTTP client bound to one org connection
#[derive(Debug)]
pub struct SalesforceClient {
    /// HTTP client
    http: reqwest::Client,
    /// Org connection (host + session credential)
    conn: OrgConnection,
    /// Base URL all request paths are joined onto
    base_url: String,
}

impl SalesforceClient {
    /// Create a client addressing the connection's host over https
    pub fn new(conn: OrgConnection) -> Self {
        let base_url = format!("https://{}", conn.host());
        Self {
            http: reqwest::Client::new(),
            conn,
            base_url,
        }
    }

    /// Create a client with a custom base URL (testing against mock hosts)
    pub fn with_base_url(conn: OrgConnection, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            conn,
            base_url: base_url.into(),
        }
    }

    /// The org connection this client authenticates as
    pub fn connection(&self) -> &OrgConnection {
        &self.conn
    }

    /// Run a SOQL query against the Tooling API and decode the records
    pub async fn query<T: DeserializeOwned>(&self, soql: &str) -> Result<Vec<T>, ApiError> {
        let url = format!(
            "{}/services/data/{}/tooling/query/",
            self.base_url,
            defaults::API_VERSION
        );
        tracing::debug!("tooling query: {soql}");

        let body = self.get(&url, &[("q", soql)], AuthMode::Bearer).await?;
        query::decode_records(&body)
    }

    /// Issue a removal call for one packaged component
    ///
    /// The endpoint is a UI action proxied through the org host: a GET with
    /// server-side side effects, addressed by 15-character legacy ids. The
    /// method, path shape, and parameter set are an external protocol
    /// constraint and are reproduced exactly.
    pub async fn remove_package_member(
        &self,
        package_id: &LegacyId,
        component_id: &LegacyId,
        confirmation_token: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.base_url, package_id.as_str());
        let params = [
            ("isdtp", "p1"),
            ("p15", component_id.as_str()),
            ("remove_package_member", "1"),
            ("_CONFIRMATIONTOKEN", confirmation_token),
        ];

        self.get(&url, &params, AuthMode::Cookie).await?;
        Ok(())
    }

    /// Issue an authenticated GET and return the response body
    ///
    /// Any status other than 200 is a [`ApiError::RequestFailed`] carrying
    /// the status text.
    async fn get(
        &self,
        url: &str,
        params: &[(&str, &str)],
        auth: AuthMode,
    ) -> Result<String, ApiError> {
        let request = self.http.get(url).query(params);
        let request = match auth {
            AuthMode::Bearer => request.header(
                AUTHORIZATION,
                format!("Bearer {}", self.conn.session_id()),
            ),
            AuthMode::Cookie => {
                request.header(COOKIE, format!("sid={}", self.conn.session_id()))
            }
        };

        let response = request.send().await?;
        let status = response.status();
        if status.as_u16() != 200 {
            return Err(ApiError::RequestFailed {
                status: status.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
