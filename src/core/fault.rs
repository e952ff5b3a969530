//! Error taxonomy shared by every adapter in the crate.

use std::error::Error;
use thiserror::Error;

/// Boxed, thread-safe error captured at a recovery boundary.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Message carried by [`Fault::Unknown`].
pub const UNKNOWN_MESSAGE: &str = "Unknown error";

/// Message carried by [`Fault::Absent`].
pub const ABSENT_MESSAGE: &str = "Value is undefined";

/// Errors produced or preserved by this crate.
#[derive(Debug, Error)]
pub enum Fault {
    /// An outcome was built with both or neither of value and error.
    #[error("Outcome {reason}")]
    Construction { reason: ConstructionReason },

    /// Error captured from a wrapped operation, kept verbatim.
    #[error("{0}")]
    Underlying(BoxError),

    /// The wrapped operation failed without an error value (a panic).
    #[error("Unknown error")]
    Unknown,

    /// A guarded value was absent.
    #[error("Value is undefined")]
    Absent,

    /// `Outcome::expect` on a failure.
    #[error("{message}:\n{cause}")]
    Expectation {
        message: String,
        #[source]
        cause: BoxError,
    },
}

/// Which half of the construction invariant was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionReason {
    Neither,
    Both,
}

impl std::fmt::Display for ConstructionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Neither => f.write_str("must have a value or an error"),
            Self::Both => f.write_str("cannot have both a value and an error"),
        }
    }
}

impl Fault {
    /// Capture any error-like value as [`Fault::Underlying`].
    ///
    /// A value that already is a `Fault` is returned unchanged.
    pub fn underlying<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        let boxed: BoxError = error.into();
        match boxed.downcast::<Fault>() {
            Ok(fault) => *fault,
            Err(other) => Fault::Underlying(other),
        }
    }

    /// Borrow the captured error as a concrete type, if it is one.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            Fault::Underlying(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }

    pub fn is_construction(&self) -> bool {
        matches!(self, Fault::Construction { .. })
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Fault::Absent)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Fault::Unknown)
    }
}
