//! Recovery boundary between fallible code and [`Outcome`].
//!
//! Code below the boundary reports failure natively: by returning
//! `Err`, or by panicking. [`try_sync`] and [`try_async`] catch both and
//! hand the caller an [`Outcome`]; nothing they capture escapes as a panic.
//!
//! | wrapped operation does | outcome                               |
//! |------------------------|---------------------------------------|
//! | returns `Ok(v)`        | `Success(v)`                          |
//! | returns `Err(fault)`   | `Failure(fault)`                      |
//! | returns `Err(e)`       | `Failure(Fault::Underlying(e))`       |
//! | panics with a `Fault`  | `Failure(fault)`                      |
//! | panics otherwise       | `Failure(Fault::Unknown)`             |
//!
//! A captured panic still runs the process panic hook, so the default hook
//! prints its message to stderr.

use crate::core::{BoxError, Fault, Outcome};
use futures_lite::future::CatchUnwind;
use futures_lite::FutureExt;
use pin_project_lite::pin_project;
use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::task::{ready, Context, Poll};

/// Run `f` now and capture its result or panic.
///
/// # Example
///
/// ```rust
/// use tryguard::attempt::try_sync;
///
/// let parsed = try_sync(|| "42".parse::<i32>());
/// assert_eq!(parsed.unwrap_or(0), 42);
///
/// let failed = try_sync(|| "forty-two".parse::<i32>());
/// assert!(failed.is_err());
/// ```
pub fn try_sync<T, E, F>(f: F) -> Outcome<T, Fault>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    settle(panic::catch_unwind(AssertUnwindSafe(f)))
}

/// Await `future` and capture its result or panic.
///
/// The returned future does nothing until polled.
///
/// ```rust
/// use tryguard::attempt::try_async;
///
/// let outcome = futures_lite::future::block_on(try_async(async {
///     Err::<i32, _>("bad")
/// }));
/// assert_eq!(outcome.get_err().map(|e| e.to_string()), Some("bad".to_string()));
/// ```
pub fn try_async<T, E, Fut>(future: Fut) -> TryAsync<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    TryAsync {
        inner: AssertUnwindSafe(future).catch_unwind(),
    }
}

pin_project! {
    /// Future returned by [`try_async`].
    #[must_use = "futures do nothing unless polled"]
    pub struct TryAsync<Fut> {
        #[pin]
        inner: CatchUnwind<AssertUnwindSafe<Fut>>,
    }
}

impl<T, E, Fut> Future for TryAsync<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    type Output = Outcome<T, Fault>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let caught = ready!(self.project().inner.poll(cx));
        Poll::Ready(settle(caught))
    }
}

fn settle<T, E>(caught: Result<Result<T, E>, Box<dyn Any + Send>>) -> Outcome<T, Fault>
where
    E: Into<BoxError>,
{
    match caught {
        Ok(Ok(value)) => Outcome::Success(value),
        Ok(Err(error)) => Outcome::Failure(Fault::underlying(error)),
        Err(payload) => Outcome::Failure(recover_panic(payload)),
    }
}

/// Turn a panic payload into a [`Fault`].
///
/// A payload raised with `std::panic::panic_any(fault)` is kept as is;
/// anything else becomes [`Fault::Unknown`].
pub(crate) fn recover_panic(payload: Box<dyn Any + Send>) -> Fault {
    let payload = match payload.downcast::<Fault>() {
        Ok(fault) => return *fault,
        Err(other) => other,
    };

    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string payload>");
    tracing::debug!(panic = message, "captured panic at recovery boundary");

    Fault::Unknown
}

/// Input shapes accepted by [`attempt`].
///
/// Implemented for [`Call`] (a zero-argument callable, run synchronously)
/// and [`Pending`] (a pending computation, awaited).
pub trait Attempt {
    type Output;

    fn attempt(self) -> Self::Output;
}

/// A zero-argument callable to run through [`try_sync`].
#[derive(Debug, Clone, Copy)]
pub struct Call<F>(pub F);

/// A pending computation to run through [`try_async`].
#[derive(Debug)]
pub struct Pending<Fut>(pub Fut);

impl<T, E, F> Attempt for Call<F>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    type Output = Outcome<T, Fault>;

    fn attempt(self) -> Self::Output {
        try_sync(self.0)
    }
}

impl<T, E, Fut> Attempt for Pending<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    type Output = TryAsync<Fut>;

    fn attempt(self) -> Self::Output {
        try_async(self.0)
    }
}

/// Dispatch to [`try_sync`] or [`try_async`] by the shape of `input`.
///
/// ```rust
/// use tryguard::attempt::{attempt, Call, Pending};
///
/// let now = attempt(Call(|| Ok::<_, std::io::Error>(1)));
/// assert!(now.is_ok());
///
/// let later = futures_lite::future::block_on(attempt(Pending(async {
///     Ok::<_, std::io::Error>(2)
/// })));
/// assert_eq!(later.unwrap_or(0), 2);
/// ```
pub fn attempt<A: Attempt>(input: A) -> A::Output {
    input.attempt()
}
