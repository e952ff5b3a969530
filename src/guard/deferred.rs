//! Guard over a pending computation.
//!
//! The legacy accessors `or` and `throw_if_absent` treat a failed
//! computation exactly like an absent value. Callers that need to tell the
//! two apart use [`GuardAsync::settle`].

use super::eager::GuardSync;
use crate::attempt::recover_panic;
use crate::core::{BoxError, Fault};
use futures_lite::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// How a guarded computation resolved.
#[derive(Debug)]
pub enum Presence<T> {
    /// Resolved to a value
    Present(T),

    /// Resolved without a value
    Absent,

    /// The computation itself failed
    Errored(Fault),
}

impl<T> Presence<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Presence::Present(_))
    }

    /// Collapse to `Option`, dropping any error.
    pub fn into_option(self) -> Option<T> {
        match self {
            Presence::Present(value) => Some(value),
            Presence::Absent | Presence::Errored(_) => None,
        }
    }
}

/// Resolved shapes a [`GuardAsync`] understands.
///
/// `Option<T>` can only be present or absent; `Result<Option<T>, E>` can
/// also report an error.
pub trait Settle {
    type Value;

    fn into_presence(self) -> Presence<Self::Value>;
}

impl<T> Settle for Option<T> {
    type Value = T;

    fn into_presence(self) -> Presence<T> {
        match self {
            Some(value) => Presence::Present(value),
            None => Presence::Absent,
        }
    }
}

impl<T, E> Settle for Result<Option<T>, E>
where
    E: Into<BoxError>,
{
    type Value = T;

    fn into_presence(self) -> Presence<T> {
        match self {
            Ok(resolved) => resolved.into_presence(),
            Err(error) => Presence::Errored(Fault::underlying(error)),
        }
    }
}

/// Guard over a computation that resolves to a possibly-absent value.
///
/// Every accessor consumes the guard, so the computation is awaited
/// exactly once.
///
/// # Example
///
/// ```rust
/// use futures_lite::future::block_on;
/// use tryguard::guard::guard_async;
///
/// assert_eq!(block_on(guard_async(async { None::<i32> }).or(5)), 5);
/// assert_eq!(block_on(guard_async(async { Some(10) }).or(5)), 10);
///
/// let failed = guard_async(async { Err::<Option<i32>, _>("offline") });
/// assert_eq!(block_on(failed.or(5)), 5);
/// ```
#[derive(Debug)]
#[must_use = "a guard does nothing until one of its accessors is awaited"]
pub struct GuardAsync<Fut> {
    pending: Fut,
}

/// Guard a pending computation.
pub fn guard_async<Fut>(pending: Fut) -> GuardAsync<Fut>
where
    Fut: Future,
    Fut::Output: Settle,
{
    GuardAsync { pending }
}

impl<Fut> GuardAsync<Fut>
where
    Fut: Future,
    Fut::Output: Settle,
{
    /// Await the computation and report all three ways it can resolve.
    ///
    /// A panic while polling is reported as `Errored`.
    pub async fn settle(self) -> Presence<<Fut::Output as Settle>::Value> {
        match AssertUnwindSafe(self.pending).catch_unwind().await {
            Ok(resolved) => resolved.into_presence(),
            Err(payload) => Presence::Errored(recover_panic(payload)),
        }
    }

    /// The resolved value if present, else `default`.
    ///
    /// A failed computation also yields `default`.
    pub async fn or(
        self,
        default: <Fut::Output as Settle>::Value,
    ) -> <Fut::Output as Settle>::Value {
        match self.settle().await {
            Presence::Present(value) => value,
            Presence::Absent => default,
            Presence::Errored(fault) => {
                tracing::debug!(error = %fault, "guarded computation failed, using default");
                default
            }
        }
    }

    /// The resolved value if present, else [`Fault::Absent`].
    ///
    /// A failed computation also yields [`Fault::Absent`].
    pub async fn throw_if_absent(self) -> Result<<Fut::Output as Settle>::Value, Fault> {
        match self.settle().await {
            Presence::Present(value) => Ok(value),
            Presence::Absent => Err(Fault::Absent),
            Presence::Errored(fault) => {
                tracing::debug!(error = %fault, "guarded computation failed, reporting absence");
                Err(Fault::Absent)
            }
        }
    }

    /// Await the computation and continue with a synchronous guard.
    pub async fn resolve(self) -> GuardSync<<Fut::Output as Settle>::Value> {
        GuardSync::new(self.settle().await.into_option())
    }
}
