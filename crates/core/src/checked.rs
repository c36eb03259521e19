//! Combinators taking an optional function.
//!
//! Closures cannot be null, so the plain combinators on [`Expected`] never
//! see an absent function. Callers holding an `Option<F>`, e.g. a step looked
//! up by name, go through [`CheckedExpected`] instead. The function argument
//! is validated before the payload is looked at.

use crate::error::Error;
use crate::expected::Expected;
use crate::result::Result;

/// Combinators accepting an optional function argument.
pub trait CheckedExpected<T, E>: Sized {
    /// Call `consumer` with the value if both are present.
    fn if_value_checked<F>(&self, consumer: Option<F>)
    where
        F: FnOnce(&T);

    /// Keep the value if the predicate is present and matches.
    fn filter_checked<P>(self, predicate: Option<P>) -> Option<T>
    where
        P: FnOnce(&T) -> bool;

    /// [`Expected::map`] with an optional mapper.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFunction`] if `mapper` is `None`.
    fn map_checked<U, F>(self, mapper: Option<F>) -> Result<Expected<U, E>>
    where
        F: FnOnce(T) -> U;

    /// [`Expected::bind`] with an optional binder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFunction`] if `binder` is `None`.
    fn bind_checked<U, F>(self, binder: Option<F>) -> Result<Option<U>>
    where
        F: FnOnce(T) -> U;

    /// [`Expected::bind_expected`] with an optional binder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFunction`] if `binder` is `None`.
    fn bind_expected_checked<U, F>(self, binder: Option<F>) -> Result<Expected<U, E>>
    where
        F: FnOnce(T) -> Expected<U, E>;
}

fn require<F>(function: Option<F>, operation: &'static str, argument: &'static str) -> Result<F> {
    function.ok_or_else(|| {
        tracing::warn!(operation, argument, "Function argument missing");
        Error::missing_function(operation, argument)
    })
}

impl<T, E> CheckedExpected<T, E> for Expected<T, E> {
    fn if_value_checked<F>(&self, consumer: Option<F>)
    where
        F: FnOnce(&T),
    {
        if let Some(consumer) = consumer {
            self.if_value(consumer);
        }
    }

    fn filter_checked<P>(self, predicate: Option<P>) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        predicate.and_then(|predicate| self.filter(predicate))
    }

    fn map_checked<U, F>(self, mapper: Option<F>) -> Result<Expected<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        require(mapper, "map", "mapper").map(|mapper| self.map(mapper))
    }

    fn bind_checked<U, F>(self, binder: Option<F>) -> Result<Option<U>>
    where
        F: FnOnce(T) -> U,
    {
        require(binder, "bind", "binder").map(|binder| self.bind(binder))
    }

    fn bind_expected_checked<U, F>(self, binder: Option<F>) -> Result<Expected<U, E>>
    where
        F: FnOnce(T) -> Expected<U, E>,
    {
        require(binder, "bind_expected", "binder").map(|binder| self.bind_expected(binder))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::arithmetic_side_effects)]

    use std::cell::Cell;

    use super::*;

    type Step = fn(i32) -> i32;

    #[test]
    fn test_if_value_checked_absent_consumer_is_noop() {
        let expected: Expected<i32, i32> = Expected::of_value(1337);
        expected.if_value_checked(None::<fn(&i32)>);
    }

    #[test]
    fn test_if_value_checked_present_consumer() {
        let seen = Cell::new(0);
        let expected: Expected<i32, i32> = Expected::of_value(1337);
        expected.if_value_checked(Some(|v: &i32| seen.set(*v)));
        assert_eq!(seen.get(), 1337);

        let called = Cell::new(false);
        let failed: Expected<i32, i32> = Expected::of_error(404);
        failed.if_value_checked(Some(|_: &i32| called.set(true)));
        assert!(!called.get());
    }

    #[test]
    fn test_filter_checked() {
        let expected: Expected<i32, i32> = Expected::of_value(1337);
        assert_eq!(expected.filter_checked(Some(|v: &i32| *v == 1337)), Some(1337));
        assert_eq!(expected.filter_checked(None::<fn(&i32) -> bool>), None);
    }

    #[test]
    fn test_map_checked_missing_mapper() {
        let expected: Expected<i32, i32> = Expected::of_value(1337);
        assert_eq!(
            expected.map_checked(None::<Step>),
            Err(Error::missing_function("map", "mapper"))
        );
    }

    #[test]
    fn test_map_checked_missing_mapper_on_error() {
        let failed: Expected<i32, i32> = Expected::of_error(404);
        assert_eq!(
            failed.map_checked(None::<Step>),
            Err(Error::missing_function("map", "mapper"))
        );
    }

    #[test]
    fn test_map_checked_present_mapper() {
        let expected: Expected<i32, i32> = Expected::of_value(1337);
        let mapped = expected.map_checked(Some(|v: i32| v + 1));
        assert_eq!(mapped, Ok(Expected::of_value(1338)));
    }

    #[test]
    fn test_bind_checked() {
        let expected: Expected<i32, i32> = Expected::of_value(2);
        assert_eq!(expected.bind_checked(Some(|v: i32| v * 10)), Ok(Some(20)));
        assert_eq!(
            expected.bind_checked(None::<Step>),
            Err(Error::missing_function("bind", "binder"))
        );

        let failed: Expected<i32, i32> = Expected::of_error(404);
        assert_eq!(failed.bind_checked(Some(|v: i32| v * 10)), Ok(None));
    }

    #[test]
    fn test_bind_expected_checked() {
        let expected: Expected<i32, i32> = Expected::of_value(2);
        assert_eq!(
            expected.bind_expected_checked(Some(|v: i32| Expected::of_value(v * 10))),
            Ok(Expected::of_value(20))
        );
        assert_eq!(
            expected.bind_expected_checked(None::<fn(i32) -> Expected<i32, i32>>),
            Err(Error::missing_function("bind_expected", "binder"))
        );
    }
}
