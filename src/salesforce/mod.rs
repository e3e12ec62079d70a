//! Salesforce org API client
//!
//! Authenticated access to the Tooling API query endpoint and the
//! UI-proxied package-member removal endpoint.

pub mod client;
pub mod connection;
pub mod ids;
pub mod query;
pub mod records;

pub use client::{AuthMode, SalesforceClient};
pub use connection::OrgConnection;
