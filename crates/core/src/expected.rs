//! The `Expected` disjoint union and its Railway-style combinators.
//!
//! An `Expected<T, E>` holds either the expected value (`T`) or an
//! unexpected error value (`E`). Which one is fixed at construction; every
//! transformation produces a new instance.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Slot};
use crate::result::Result;

/// Either an expected value or an unexpected error value.
///
/// Absent payloads are expressed by the caller through the payload type,
/// e.g. `Expected<Option<i32>, E>`. The variant alone decides success or
/// failure, so `Expected::of_value(None)` is still a success.
///
/// # Examples
///
/// ```
/// use expected_core::Expected;
///
/// let parsed: Expected<i32, String> = Expected::of_value(1337);
/// let next = parsed.map(|v| v + 1);
/// assert_eq!(next.get_value(), Ok(&1338));
///
/// let failed: Expected<i32, u16> = Expected::of_error(404);
/// assert_eq!(failed.map(|v| v + 1).get_error(), Ok(&404));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use = "an Expected may hold an error value which should be handled"]
pub enum Expected<T, E> {
    /// The expected value.
    Value(T),
    /// The unexpected error value.
    Error(E),
}

impl<T, E> Expected<T, E> {
    /// Make an `Expected` holding the given value.
    pub const fn of_value(value: T) -> Self {
        Self::Value(value)
    }

    /// Make an `Expected` holding the given error value.
    pub const fn of_error(error: E) -> Self {
        Self::Error(error)
    }

    /// True if this holds the expected value.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// True if this holds an unexpected error value.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        !self.has_value()
    }

    /// Borrow the expected value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if this holds an error value,
    /// whatever that error value is.
    pub fn get_value(&self) -> Result<&T> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(_) => Err(missing(Slot::Value)),
        }
    }

    /// Borrow the error value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if this holds the expected value.
    pub fn get_error(&self) -> Result<&E> {
        match self {
            Self::Error(error) => Ok(error),
            Self::Value(_) => Err(missing(Slot::Error)),
        }
    }

    /// Take the expected value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if this holds an error value.
    pub fn into_value(self) -> Result<T> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(_) => Err(missing(Slot::Value)),
        }
    }

    /// Take the error value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if this holds the expected value.
    pub fn into_error(self) -> Result<E> {
        match self {
            Self::Error(error) => Ok(error),
            Self::Value(_) => Err(missing(Slot::Error)),
        }
    }

    /// The expected value, discarding any error value.
    #[must_use]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// The error value, discarding any expected value.
    #[must_use]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Error(error) => Some(error),
            Self::Value(_) => None,
        }
    }

    /// Convert from `&Expected<T, E>` to `Expected<&T, &E>`.
    pub const fn as_ref(&self) -> Expected<&T, &E> {
        match self {
            Self::Value(value) => Expected::Value(value),
            Self::Error(error) => Expected::Error(error),
        }
    }

    /// Call `consumer` with the expected value, if there is one.
    pub fn if_value<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Value(value) = self {
            consumer(value);
        }
    }

    /// Keep the expected value only if it matches `predicate`.
    ///
    /// The predicate is never called on an error value.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Value(value) => predicate(&value).then_some(value),
            Self::Error(_) => None,
        }
    }

    /// Apply `mapper` to the expected value and wrap the result as a value.
    ///
    /// An error value is carried over unchanged and `mapper` is not called.
    pub fn map<U, F>(self, mapper: F) -> Expected<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => Expected::Value(mapper(value)),
            Self::Error(error) => Expected::Error(error),
        }
    }

    /// Apply `binder` to the expected value and return its result unwrapped.
    ///
    /// Returns `None` for an error value without calling `binder`.
    pub fn bind<U, F>(self, binder: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => Some(binder(value)),
            Self::Error(_) => None,
        }
    }

    /// Chain a fallible step: the binder's `Expected` is returned as is.
    ///
    /// An error value is carried over unchanged and `binder` is not called.
    pub fn bind_expected<U, F>(self, binder: F) -> Expected<U, E>
    where
        F: FnOnce(T) -> Expected<U, E>,
    {
        match self {
            Self::Value(value) => binder(value),
            Self::Error(error) => Expected::Error(error),
        }
    }

    /// Apply `mapper` to the error value, leaving an expected value alone.
    pub fn map_error<F2, F>(self, mapper: F) -> Expected<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Value(value) => Expected::Value(value),
            Self::Error(error) => Expected::Error(mapper(error)),
        }
    }

    /// Map both sides in a single operation.
    pub fn bimap<U, F2, VF, EF>(self, value_fn: VF, error_fn: EF) -> Expected<U, F2>
    where
        VF: FnOnce(T) -> U,
        EF: FnOnce(E) -> F2,
    {
        match self {
            Self::Value(value) => Expected::Value(value_fn(value)),
            Self::Error(error) => Expected::Error(error_fn(error)),
        }
    }

    /// Perform a side effect on the expected value, returning `self`.
    pub fn tap_value<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Value(ref value) = self {
            f(value);
        }
        self
    }

    /// Perform a side effect on the error value, returning `self`.
    pub fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Error(ref error) = self {
            f(error);
        }
        self
    }

    /// The expected value, or `default`.
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Value(value) => value,
            Self::Error(_) => default,
        }
    }

    /// The expected value, or one computed from the error value.
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Value(value) => value,
            Self::Error(error) => f(error),
        }
    }

    /// Convert into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the error value as `Err`.
    pub fn into_result(self) -> std::result::Result<T, E> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }
}

fn missing(slot: Slot) -> Error {
    tracing::debug!(%slot, "Accessor called on the inactive slot");
    Error::missing_element(slot)
}

impl<T, E> From<std::result::Result<T, E>> for Expected<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<Expected<T, E>> for std::result::Result<T, E> {
    fn from(expected: Expected<T, E>) -> Self {
        expected.into_result()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Expected<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "value({value})"),
            Self::Error(error) => write!(f, "error({error})"),
        }
    }
}
