//! Domain types and rules for the product catalog.
//!
//! This crate has no I/O: it holds the shared error type, the id/timestamp
//! aliases, and the pure validation, search and money helpers used by the
//! repository and HTTP layers.

pub mod error;
pub mod money;
pub mod search;
pub mod types;
pub mod validation;
