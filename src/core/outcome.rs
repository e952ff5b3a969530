//! The success-or-failure container.
//!
//! An [`Outcome`] holds exactly one of a success value or an error. The
//! variant tag enforces that; the only checked construction path is
//! [`Outcome::from_parts`], for callers holding two optional halves.

use super::fault::{BoxError, ConstructionReason, Fault};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Either a success value or an error, never both, never neither.
///
/// # Example
///
/// ```rust
/// use tryguard::core::{err, ok, Outcome};
///
/// let good: Outcome<i32, std::fmt::Error> = ok(3);
/// assert!(good.is_ok());
/// assert_eq!(good.unwrap_or(0), 3);
///
/// let bad: Outcome<i32, std::fmt::Error> = err(std::fmt::Error);
/// assert!(bad.is_err());
/// assert_eq!(bad.unwrap_or(0), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome<T, E> {
    /// The operation produced a value
    Success(T),

    /// The operation failed
    Failure(E),
}

/// Build a successful outcome.
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Build a failed outcome.
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    /// Build an outcome from two optional halves.
    ///
    /// Exactly one half must be present; otherwise this fails with
    /// [`Fault::Construction`].
    ///
    /// ```rust
    /// use tryguard::core::{Fault, Outcome};
    ///
    /// let outcome = Outcome::<i32, Fault>::from_parts(Some(1), None).unwrap();
    /// assert!(outcome.is_ok());
    ///
    /// let invalid = Outcome::<i32, Fault>::from_parts(None, None);
    /// assert!(invalid.unwrap_err().is_construction());
    /// ```
    pub fn from_parts(value: Option<T>, error: Option<E>) -> Result<Self, Fault> {
        match (value, error) {
            (Some(value), None) => Ok(Outcome::Success(value)),
            (None, Some(error)) => Ok(Outcome::Failure(error)),
            (None, None) => Err(Fault::Construction {
                reason: ConstructionReason::Neither,
            }),
            (Some(_), Some(_)) => Err(Fault::Construction {
                reason: ConstructionReason::Both,
            }),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Return the value, or hand back exactly the stored error.
    ///
    /// Use with `?` to leave outcome-based flow. Never panics.
    pub fn unwrap(self) -> Result<T, E> {
        self.into_result()
    }

    /// Return the value, or `default` on failure. Never fails.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Return the value slot without checking the variant.
    ///
    /// On a failure the slot is empty and this returns `None`; the error is
    /// not reported.
    pub fn unwrap_unchecked(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Like [`unwrap`](Self::unwrap), but a failure is replaced by
    /// [`Fault::Expectation`] combining `message` with the error's text.
    /// The original error stays reachable through `Error::source`. Never
    /// panics.
    ///
    /// ```rust
    /// use tryguard::core::{err, Outcome};
    ///
    /// let outcome: Outcome<u8, std::fmt::Error> = err(std::fmt::Error);
    /// let fault = outcome.expect("rendering").unwrap_err();
    /// assert!(fault.to_string().starts_with("rendering:\n"));
    /// ```
    pub fn expect(self, message: &str) -> Result<T, Fault>
    where
        E: Into<BoxError>,
    {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(Fault::Expectation {
                message: message.to_string(),
                cause: error.into(),
            }),
        }
    }

    /// The stored error, or `None` on success.
    pub fn get_err(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Collecting outcomes stops at the first failure and returns it.
impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}
