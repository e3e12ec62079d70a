//! Core business logic module
//!
//! This module contains the package-removal workflow. It talks to the org
//! only through [`crate::salesforce::SalesforceClient`].
//!
//! # Submodules
//!
//! - [`catalog`] - Unlocked-package inventory
//! - [`remove`] - Packaged-component listing and sequential removal

pub mod catalog;
pub mod remove;
