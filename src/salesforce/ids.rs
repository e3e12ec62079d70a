//! Legacy 15-character record identifiers
//!
//! The removal endpoint addresses packages and components by the first 15
//! characters of their record ids (the case-sensitive legacy form). Shorter
//! identifiers cannot be addressed at all and are rejected up front.

use std::fmt;

use thiserror::Error;

use crate::config::defaults::LEGACY_ID_WIDTH;

/// Identifier too short to carry the 15-character legacy prefix
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("identifier '{id}' is shorter than {LEGACY_ID_WIDTH} characters")]
pub struct IdTooShort {
    /// The offending identifier, verbatim
    pub id: String,
}

/// The first 15 characters of a Salesforce record id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyId(String);

impl LegacyId {
    /// Truncate an id to its legacy form, rejecting ids under 15 characters
    pub fn new(id: &str) -> Result<Self, IdTooShort> {
        match id.get(..LEGACY_ID_WIDTH) {
            Some(prefix) => Ok(Self(prefix.to_string())),
            None => Err(IdTooShort { id: id.to_string() }),
        }
    }

    /// The legacy id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LegacyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_18_char_id() {
        let id = LegacyId::new("0338d000000XXXXAAY").unwrap();
        assert_eq!(id.as_str(), "0338d000000XXXX");
    }

    #[test]
    fn test_exact_15_chars_kept() {
        let id = LegacyId::new("0338d000000XXXX").unwrap();
        assert_eq!(id.as_str(), "0338d000000XXXX");
    }

    #[test]
    fn test_short_id_rejected() {
        let err = LegacyId::new("0338d0").unwrap_err();
        assert_eq!(err.id, "0338d0");
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(LegacyId::new("").is_err());
    }

    #[test]
    fn test_non_boundary_truncation_rejected() {
        // 14 ASCII chars then a two-byte char straddling the cut: must not panic
        assert!(LegacyId::new("0338d000000XXX\u{00e9}Y").is_err());
    }
}
