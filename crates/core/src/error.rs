//! Error types for `Expected` accessors and checked combinators.
//!
//! Both kinds are caller mistakes, reported as values instead of panics.

use strum::Display;
use thiserror::Error;

/// The payload slot an accessor asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Slot {
    #[strum(serialize = "value")]
    Value,
    #[strum(serialize = "error value")]
    Error,
}

/// Core error type for `Expected` operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("no {slot} present")]
    MissingElement { slot: Slot },

    #[error("{operation} requires a {argument} function, none was supplied")]
    MissingFunction {
        operation: &'static str,
        argument: &'static str,
    },
}

impl Error {
    /// Create a missing element error for the given slot.
    #[must_use]
    pub const fn missing_element(slot: Slot) -> Self {
        Self::MissingElement { slot }
    }

    /// Create a missing function error.
    #[must_use]
    pub const fn missing_function(operation: &'static str, argument: &'static str) -> Self {
        Self::MissingFunction {
            operation,
            argument,
        }
    }

    /// True for accessor errors.
    #[must_use]
    pub const fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement { .. })
    }
}
