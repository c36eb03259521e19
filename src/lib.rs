#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Expected
//!
//! An expected value or an unexpected error value, fixed at construction.
//!
//! This library re-exports the workspace crates for convenience.

// Re-export all crates
pub use expected_core;
pub use expected_core::functional;

pub use expected_core::{
    CheckedExpected, Error, Expected, ExpectedExt, IntoExpected, OptionExt, Result, Slot,
};

pub mod prelude;
