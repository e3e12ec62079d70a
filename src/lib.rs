//! sfunpack - unlocked-package metadata removal for Salesforce orgs
//!
//! This library inventories the "Unlocked" packages installed in an org and
//! removes the metadata components bundled inside a selected package, one
//! component at a time, gated by a confirmation token.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing, prompting, and output formatting
//! - [`core`] - Business logic (package catalog and removal workflow)
//! - [`salesforce`] - Org API client (authenticated requests, query decoding)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod salesforce;
