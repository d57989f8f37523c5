//! Fixed-width integer addition.
//!
//! The contract lives in [`test::add`], reachable as `add::test::add`. It adds
//! two `i32` values and wraps on overflow with two's-complement semantics, so
//! it never panics. Callers that need a different overflow policy use the
//! variants in [`policy`].
//!
//! ```
//! assert_eq!(add::test::add(2, 3), 5);
//! assert_eq!(add::test::add(i32::MAX, 1), i32::MIN);
//! ```

#[cfg(feature = "certora")]
mod certora;
pub mod error;
pub mod ffi;
pub mod policy;
#[cfg(feature = "python")]
mod python;

pub use error::{AddError, ParsePolicyError};
pub use policy::OverflowPolicy;
