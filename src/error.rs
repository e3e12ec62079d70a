//! Error types for sfunpack
//!
//! Domain-specific error types using thiserror.

use thiserror::Error;

/// Errors from authenticated API operations
///
/// Every failure is fatal for the current operation: no retry, no partial
/// recovery. Errors propagate to the immediate caller unchanged.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network-level failure reaching the org host
    #[error("network error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// HTTP status other than 200
    #[error("request failed with status {status}")]
    RequestFailed { status: String },

    /// Response body does not match the expected JSON shape
    #[error("failed to decode query response: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
}
