//! Overflow policies for addition.
//!
//! [`crate::test::add`] always wraps. The functions here let a caller pick
//! one of the other two policies instead: clamp the result to the `i32`
//! bounds, or reject the operation with [`AddError::Overflow`].
//!
//! ```
//! use add::policy::{add_with_policy, OverflowPolicy};
//!
//! assert_eq!(add_with_policy(i32::MAX, 1, OverflowPolicy::Wrap), Ok(i32::MIN));
//! assert_eq!(add_with_policy(i32::MAX, 1, OverflowPolicy::Saturate), Ok(i32::MAX));
//! assert!(add_with_policy(i32::MAX, 1, OverflowPolicy::Fail).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::{AddError, ParsePolicyError};
use crate::test::add;

/// What to do when a sum leaves the `i32` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Wrap around with two's-complement semantics.
    #[default]
    Wrap,
    /// Clamp to `i32::MIN` or `i32::MAX`.
    Saturate,
    /// Report [`AddError::Overflow`].
    Fail,
}

impl OverflowPolicy {
    /// The lowercase name accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            OverflowPolicy::Wrap => "wrap",
            OverflowPolicy::Saturate => "saturate",
            OverflowPolicy::Fail => "fail",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" => Ok(OverflowPolicy::Wrap),
            "saturate" => Ok(OverflowPolicy::Saturate),
            "fail" => Ok(OverflowPolicy::Fail),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Adds two integers, failing if the sum does not fit in an `i32`.
#[inline]
pub fn checked_add(a: i32, b: i32) -> Result<i32, AddError> {
    a.checked_add(b).ok_or(AddError::Overflow { a, b })
}

/// Adds two integers, clamping the sum to the `i32` bounds.
#[inline]
pub fn saturating_add(a: i32, b: i32) -> i32 {
    a.saturating_add(b)
}

/// Adds two integers under the given overflow policy.
///
/// Only [`OverflowPolicy::Fail`] can return an error.
pub fn add_with_policy(a: i32, b: i32, policy: OverflowPolicy) -> Result<i32, AddError> {
    let overflows = a.checked_add(b).is_none();
    match policy {
        OverflowPolicy::Wrap => {
            if overflows {
                trace!("wrapping overflow of {a} + {b}");
            }
            Ok(add(a, b))
        }
        OverflowPolicy::Saturate => {
            if overflows {
                debug!("saturating overflow of {a} + {b}");
            }
            Ok(saturating_add(a, b))
        }
        OverflowPolicy::Fail => checked_add(a, b).inspect_err(|_| {
            debug!("rejecting overflow of {a} + {b}");
        }),
    }
}
