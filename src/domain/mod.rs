//! Domain layer containing triage business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, timestamps, errors)
//! - `triage` - Phase classification, prompt construction, response cleanup

pub mod foundation;
pub mod triage;
