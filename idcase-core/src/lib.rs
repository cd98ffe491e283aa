//! Core utilities for the idcase identifier tool.
//!
//! This crate provides the casing pipeline that resolves arbitrary
//! identifiers to Go-style PascalCase type names, and the null-assertion
//! helper used where an absent value is a precondition violation.

mod casing;
mod nonnull;

// Casing utilities
pub use casing::{GO_INITIALISMS, to_camel_case, to_go_pascal_case, to_start_case};
// Presence assertions
pub use nonnull::{NullValueError, nullthrows, nullthrows_with};
