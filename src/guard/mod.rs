//! Guards around values that may be absent.
//!
//! - [`GuardSync`] wraps an already-resolved `Option`
//! - [`GuardAsync`] wraps a pending computation that resolves to one
//!
//! Both offer `or` (substitute a default) and `throw_if_absent` (fail with
//! [`Fault::Absent`](crate::core::Fault::Absent)). The async guard also
//! exposes [`GuardAsync::settle`], which keeps the difference between an
//! absent value and a failed computation.

mod deferred;
mod eager;

pub use deferred::{guard_async, GuardAsync, Presence, Settle};
pub use eager::{guard_sync, GuardSync};
