//! Tooling API query envelope decoding
//!
//! A query response is a JSON envelope `{ "records": [...] }`. Decoding
//! preserves response order and fails whole-sale on any shape mismatch;
//! there is no partial record recovery.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// Query result envelope returned by the Tooling API
#[derive(Debug, Deserialize)]
pub struct QueryResult<T> {
    /// Records in response order
    pub records: Vec<T>,
}

/// Decode a query-result envelope into typed records, preserving order
pub fn decode_records<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    let result: QueryResult<T> = serde_json::from_str(body)?;
    Ok(result.records)
}
