//! Prelude module - common imports for working with `Expected`
//!
//! Import this module to get all common types and traits:
//! ```rust
//! use expected::prelude::*;
//!
//! let total = Expected::<i32, String>::of_value(20)
//!     .map(|v| v + 1)
//!     .pipe(|e| e.map(|v| v * 2));
//! assert_eq!(total.get_value(), Ok(&42));
//! ```

// Re-export functional utilities
pub use itertools::Itertools;
pub use tap::{Pipe, Tap};

// Re-export error types
pub use expected_core::{Error, Result, Slot};

// Re-export the core type and its extension traits
pub use expected_core::{CheckedExpected, Expected, ExpectedExt, IntoExpected, OptionExt};
