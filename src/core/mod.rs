//! Core outcome types.
//!
//! This module contains the pure part of the crate:
//! - The `Outcome` container and its accessors
//! - The `Fault` error taxonomy used at every recovery boundary
//!
//! Nothing in this module performs I/O or holds shared state; every
//! operation is a read over an immutable value.

mod fault;
mod outcome;

pub use fault::{BoxError, ConstructionReason, Fault, ABSENT_MESSAGE, UNKNOWN_MESSAGE};
pub use outcome::{err, ok, Outcome};
