//! Conversions between [`Outcome`] and stillwater's `Validation`.
//!
//! `Validation` accumulates errors where [`aggregate`](crate::aggregate)
//! stops at the first one; converting lets callers pick per call site.

use crate::core::Outcome;
use stillwater::Validation;

impl<T, E> From<Validation<T, E>> for Outcome<T, E> {
    fn from(validation: Validation<T, E>) -> Self {
        match validation {
            Validation::Success(value) => Outcome::Success(value),
            Validation::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Validation<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Validation::Success(value),
            Outcome::Failure(error) => Validation::Failure(error),
        }
    }
}
