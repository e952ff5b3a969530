//! Folding many outcomes into one.

use crate::core::Outcome;

/// Combine outcomes into one outcome of all their values.
///
/// Scans in order and returns the first failure as soon as it is seen;
/// later outcomes are not inspected. With no failure the values come back
/// in input order. An empty input is a success with an empty `Vec`.
///
/// # Example
///
/// ```rust
/// use tryguard::aggregate;
/// use tryguard::core::{err, ok, Outcome};
///
/// let all: Outcome<Vec<i32>, std::fmt::Error> = aggregate(vec![ok(1), ok(2), ok(3)]);
/// assert_eq!(all, ok(vec![1, 2, 3]));
///
/// let first_failure = aggregate(vec![ok(1), err(std::fmt::Error), ok(3)]);
/// assert!(first_failure.is_err());
/// ```
pub fn aggregate<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}
