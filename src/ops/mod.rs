//! High-level operations.
//!
//! These are the entry points the CLI commands call.

pub mod check;

pub use check::{check, CheckOptions, CheckOutcome};
