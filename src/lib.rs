//! Tryguard: outcome values at the boundary of fallible code
//!
//! Tryguard draws one line through a call stack. Below it, code fails the
//! way it naturally does, by returning `Err` or by panicking. Above it,
//! callers only ever see an [`Outcome`], and decide per call site whether
//! to inspect it or turn it back into `Err` with `?`.
//!
//! # Core Concepts
//!
//! - **Outcome**: exactly one of a success value or an error
//! - **Attempt**: adapters that run a callable or a future and capture its failure
//! - **Guard**: default substitution and absence checks for values that may be missing
//! - **Aggregate**: fold a sequence of outcomes, stopping at the first failure
//!
//! # Example
//!
//! ```rust
//! use tryguard::{aggregate, guard_sync, try_sync, Outcome};
//!
//! let ports = ["8080", "8443", "9000"]
//!     .iter()
//!     .map(|raw| try_sync(|| raw.parse::<u16>()));
//!
//! let ports = aggregate(ports);
//! assert_eq!(ports.unwrap_or(vec![]), vec![8080, 8443, 9000]);
//!
//! let fallback = guard_sync(std::env::var("TRYGUARD_DOC_UNSET").ok());
//! assert_eq!(fallback.or("default".to_string()), "default");
//! ```

pub mod aggregate;
pub mod attempt;
pub mod core;
pub mod guard;
#[cfg(feature = "stillwater")]
mod interop;

// Re-export commonly used types
pub use aggregate::aggregate;
pub use attempt::{attempt, try_async, try_sync, Attempt, Call, Pending};
pub use crate::core::{err, ok, BoxError, Fault, Outcome};
pub use guard::{guard_async, guard_sync, GuardAsync, GuardSync, Presence};
