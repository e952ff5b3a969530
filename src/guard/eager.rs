//! Guard over an already-resolved value.

use crate::core::Fault;

/// Wrapper around a value that may be absent.
///
/// # Example
///
/// ```rust
/// use tryguard::guard::guard_sync;
///
/// assert_eq!(guard_sync(None).or(5), 5);
/// assert_eq!(guard_sync(Some(10)).or(5), 10);
/// assert!(guard_sync::<i32>(None).throw_if_absent().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardSync<T> {
    value: Option<T>,
}

/// Guard a possibly-absent value.
pub fn guard_sync<T>(value: Option<T>) -> GuardSync<T> {
    GuardSync::new(value)
}

impl<T> GuardSync<T> {
    pub fn new(value: Option<T>) -> Self {
        GuardSync { value }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// The value if present, else `default`.
    pub fn or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// The value if present, else [`Fault::Absent`].
    pub fn throw_if_absent(self) -> Result<T, Fault> {
        self.value.ok_or(Fault::Absent)
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> From<Option<T>> for GuardSync<T> {
    fn from(value: Option<T>) -> Self {
        GuardSync::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_substitutes_default_when_absent() {
        assert_eq!(guard_sync(None).or(5), 5);
    }

    #[test]
    fn or_keeps_present_value() {
        assert_eq!(guard_sync(Some(10)).or(5), 10);
    }

    #[test]
    fn throw_if_absent_fails_with_absent() {
        let fault = guard_sync::<i32>(None).throw_if_absent().unwrap_err();
        assert!(fault.is_absent());
        assert_eq!(fault.to_string(), "Value is undefined");
    }

    #[test]
    fn throw_if_absent_returns_present_value() {
        assert_eq!(guard_sync(Some("cfg")).throw_if_absent().unwrap(), "cfg");
    }

    #[test]
    fn present_default_like_values_are_not_absent() {
        let guard = GuardSync::from(Some(0));
        assert!(guard.is_present());
        assert_eq!(guard.or(7), 0);
    }
}
