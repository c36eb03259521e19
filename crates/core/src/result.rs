//! Result type definition and logging extension traits for `Expected`.
//!
//! Provides functional combinators that consume an `Expected` without
//! unwrap/expect/panic, reporting discarded error values through `tracing`.

use std::fmt::Display;

use crate::error::Error;
use crate::expected::Expected;

/// The standard Result type for `Expected` operations.
///
/// Accessors and checked combinators return this type.
/// Use the `?` operator, `match`, or combinator methods to handle results.
///
/// # Examples
///
/// ```
/// use expected_core::{Expected, Result};
///
/// fn doubled(expected: &Expected<i32, String>) -> Result<i32> {
///     let value = expected.get_value()?;
///     Ok(value * 2)
/// }
///
/// assert_eq!(doubled(&Expected::of_value(21)), Ok(42));
/// assert!(doubled(&Expected::of_error("no".to_string())).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait consuming an `Expected` and logging its error value.
pub trait ExpectedExt<T, E> {
    /// Convert to an Option, logging the error value if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error value if present.
    fn or_default_logged(self, default: T) -> T;

    /// Inspect the error value without consuming the `Expected`.
    #[must_use]
    fn inspect_error<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E: Display> ExpectedExt<T, E> for Expected<T, E> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Expected::Value(value) => Some(value),
            Expected::Error(e) => {
                tracing::error!("Operation failed: {}", e);
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Expected::Value(value) => value,
            Expected::Error(e) => {
                tracing::error!("Operation failed, using default: {}", e);
                default
            }
        }
    }

    fn inspect_error<F: FnOnce(&E)>(self, f: F) -> Self {
        self.tap_error(f)
    }
}

/// Extension trait lifting `Result` and `Option` into `Expected`.
pub trait IntoExpected<T, E> {
    /// Convert into an `Expected`.
    fn into_expected(self) -> Expected<T, E>;
}

impl<T, E> IntoExpected<T, E> for std::result::Result<T, E> {
    fn into_expected(self) -> Expected<T, E> {
        Expected::from(self)
    }
}

/// Extension trait for Option types.
pub trait OptionExt<T> {
    /// Convert Option to `Expected` with a lazy error value.
    fn ok_or_expected<E, F: FnOnce() -> E>(self, err: F) -> Expected<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_expected<E, F: FnOnce() -> E>(self, err: F) -> Expected<T, E> {
        self.ok_or_else(err).into_expected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Slot;

    #[test]
    fn test_into_option_logged_value() {
        let expected: Expected<i32, String> = Expected::of_value(42);
        assert_eq!(expected.into_option_logged(), Some(42));
    }

    #[test]
    fn test_into_option_logged_error() {
        let expected: Expected<i32, Error> = Expected::of_error(Error::missing_element(Slot::Value));
        assert_eq!(expected.into_option_logged(), None);
    }

    #[test]
    fn test_or_default_logged_value() {
        let expected: Expected<i32, &str> = Expected::of_value(42);
        assert_eq!(expected.or_default_logged(0), 42);
    }

    #[test]
    fn test_or_default_logged_error() {
        let expected: Expected<i32, &str> = Expected::of_error("test");
        assert_eq!(expected.or_default_logged(99), 99);
    }

    #[test]
    fn test_inspect_error() {
        let expected: Expected<i32, &str> = Expected::of_error("test");
        let mut called = false;
        let _ = expected.inspect_error(|_| {
            called = true;
        });
        assert!(called);
    }

    #[test]
    fn test_result_into_expected() {
        let ok: std::result::Result<i32, &str> = Ok(1);
        assert_eq!(ok.into_expected(), Expected::of_value(1));

        let err: std::result::Result<i32, &str> = Err("bad");
        assert_eq!(err.into_expected(), Expected::of_error("bad"));
    }

    #[test]
    fn test_ok_or_expected() {
        let missing: Option<i32> = None;
        assert_eq!(
            missing.ok_or_expected(|| "missing value"),
            Expected::of_error("missing value")
        );
        assert_eq!(Some(3).ok_or_expected(|| "unused"), Expected::of_value(3));
    }
}
