//! Org connection value
//!
//! Holds the My-Domain host and the session credential used to authenticate
//! every API call. Immutable once constructed.

/// Connection to a Salesforce org
///
/// The host is stored without a scheme; a leading `https://` is stripped at
/// construction so URL building can prepend it exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgConnection {
    /// My-Domain host, scheme stripped
    host: String,
    /// Session credential attached to every request
    session_id: String,
}

impl OrgConnection {
    /// Create a connection from a My-Domain URL and a session id
    pub fn new(my_domain_url: impl Into<String>, session_id: impl Into<String>) -> Self {
        let raw = my_domain_url.into();
        let host = raw.strip_prefix("https://").unwrap_or(&raw).to_string();

        Self {
            host,
            session_id: session_id.into(),
        }
    }

    /// The org host, without a scheme
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The session credential
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}
