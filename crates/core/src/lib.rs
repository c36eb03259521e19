//! # Expected Core
//!
//! A disjoint union of an expected value and an unexpected error value, with
//! Railway-Oriented combinators over it.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` / `expect()` / `panic!()` - accessors return `Result` instead
//! - No `unsafe` - safe Rust only
//! - An `Expected` never changes variant after construction
//!
//! ## Error Handling
//!
//! Asking for the inactive slot yields [`Error::MissingElement`]. Checked
//! combinators given no function yield [`Error::MissingFunction`]. Use:
//! - `?` operator for propagation
//! - `map`, `bind_expected` combinators for transformation
//! - `value_or()`, `value_or_else()` for defaults

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod checked;
mod error;
mod expected;
pub mod functional;
mod result;

pub use checked::CheckedExpected;
pub use error::{Error, Slot};
pub use expected::Expected;
pub use result::{ExpectedExt, IntoExpected, OptionExt, Result};
