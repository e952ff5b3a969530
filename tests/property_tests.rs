//! Property-based tests for outcomes, guards, and aggregation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use thiserror::Error;
use tryguard::core::{err, ok, Outcome};
use tryguard::{aggregate, guard_async, guard_sync, try_async, try_sync};

#[derive(Debug, Clone, PartialEq, Error)]
#[error("failure #{0}")]
struct Numbered(u32);

prop_compose! {
    fn arbitrary_outcome()(is_ok in any::<bool>(), value in any::<i64>(), code in any::<u32>())
        -> Outcome<i64, Numbered>
    {
        if is_ok {
            ok(value)
        } else {
            err(Numbered(code))
        }
    }
}

proptest! {
    #[test]
    fn success_is_ok_and_never_err(value in any::<i64>()) {
        let outcome: Outcome<_, Numbered> = ok(value);
        prop_assert!(outcome.is_ok());
        prop_assert!(!outcome.is_err());
    }

    #[test]
    fn failure_unwrap_returns_the_stored_error(code in any::<u32>()) {
        let outcome: Outcome<i64, _> = err(Numbered(code));
        prop_assert!(outcome.is_err());
        prop_assert_eq!(outcome.unwrap(), Err(Numbered(code)));
    }

    #[test]
    fn predicates_are_exclusive_and_exhaustive(outcome in arbitrary_outcome()) {
        prop_assert!(outcome.is_ok() != outcome.is_err());
    }

    #[test]
    fn from_parts_requires_exactly_one_half(
        value in proptest::option::of(any::<i64>()),
        code in proptest::option::of(any::<u32>()),
    ) {
        let built = Outcome::from_parts(value, code.map(Numbered));
        let exactly_one = value.is_some() != code.is_some();

        prop_assert_eq!(built.is_ok(), exactly_one);
        if let Err(fault) = built {
            prop_assert!(fault.is_construction());
        }
    }

    #[test]
    fn unwrap_or_returns_default_only_on_failure(
        outcome in arbitrary_outcome(),
        default in any::<i64>(),
    ) {
        let expected = match &outcome {
            Outcome::Success(value) => *value,
            Outcome::Failure(_) => default,
        };
        prop_assert_eq!(outcome.unwrap_or(default), expected);
    }

    #[test]
    fn try_sync_maps_return_and_error(value in any::<i64>(), fail in any::<bool>()) {
        let outcome = try_sync(|| if fail { Err(Numbered(7)) } else { Ok(value) });

        if fail {
            let fault = outcome.get_err().expect("failure expected");
            prop_assert_eq!(fault.to_string(), "failure #7");
        } else {
            prop_assert_eq!(outcome.unwrap_or(value.wrapping_add(1)), value);
        }
    }

    #[test]
    fn aggregate_of_successes_keeps_order(values in prop::collection::vec(any::<i64>(), 0..20)) {
        let outcomes: Vec<Outcome<i64, Numbered>> = values.iter().copied().map(ok).collect();
        prop_assert_eq!(aggregate(outcomes), Outcome::Success(values));
    }

    #[test]
    fn aggregate_returns_first_failure(
        outcomes in prop::collection::vec(arbitrary_outcome(), 0..20)
    ) {
        let first_failure = outcomes.iter().find_map(|o| o.get_err().cloned());
        let aggregated = aggregate(outcomes.clone());

        match first_failure {
            Some(error) => prop_assert_eq!(aggregated, Outcome::Failure(error)),
            None => {
                let values: Vec<i64> = outcomes.into_iter().filter_map(Outcome::unwrap_unchecked).collect();
                prop_assert_eq!(aggregated, Outcome::Success(values));
            }
        }
    }

    #[test]
    fn sync_guard_or_matches_option(value in proptest::option::of(any::<i64>()), default in any::<i64>()) {
        prop_assert_eq!(guard_sync(value).or(default), value.unwrap_or(default));
        prop_assert_eq!(guard_sync(value).throw_if_absent().is_ok(), value.is_some());
    }
}

#[tokio::test]
async fn try_async_resolves_and_rejects() {
    let resolved = try_async(async { Ok::<_, Numbered>(7) }).await;
    assert_eq!(resolved.unwrap_or(0), 7);

    let rejected = try_async(async { Err::<i32, _>("bad") }).await;
    assert_eq!(rejected.get_err().unwrap().to_string(), "bad");
}

#[tokio::test]
async fn async_guard_defaults_on_absence_and_failure() {
    assert_eq!(guard_async(async { None::<i32> }).or(5).await, 5);

    let failed = guard_async(async { Err::<Option<i32>, _>(Numbered(1)) });
    assert_eq!(failed.or(5).await, 5);
}
