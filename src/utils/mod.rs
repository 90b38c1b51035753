//! Utility functions shared by the service and the CLI.
//!
//! - [`input`] - Validation and normalization of caller-supplied parameters

pub mod input;
