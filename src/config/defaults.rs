//! Default configuration values

/// Tooling API version used for query calls
pub const API_VERSION: &str = "v54.0";

/// Width of the legacy Salesforce record id form addressed by removal URLs
pub const LEGACY_ID_WIDTH: usize = 15;
